use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::SlideCommand;

/// Rango válido del umbral de sensibilidad (zona muerta contra el balanceo
/// natural de los brazos).
pub const SENSITIVITY_MIN: f32 = 0.02;
pub const SENSITIVITY_MAX: f32 = 0.15;

/// Rango válido del cooldown entre dos disparos aceptados, en segundos.
pub const COOLDOWN_MIN: f32 = 0.5;
pub const COOLDOWN_MAX: f32 = 3.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ambos brazos mapean a la misma acción: {0}")]
    MirroredActions(SlideCommand),

    #[error("{field} fuera de rango [{min}, {max}]: {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuración de la sesión. Inmutable desde la perspectiva del núcleo:
/// se construye una vez al arrancar a partir del archivo persistido fusionado
/// sobre los valores por defecto, y nunca se muta a mitad de sesión.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub right_arm_action: SlideCommand,
    pub left_arm_action: SlideCommand,
    pub sensitivity: f32,
    pub cooldown_secs: f32,
    pub use_arrow_keys: bool,
    pub mirror_camera: bool,
    pub show_debug: bool,
    /// Idioma de la interfaz. Solo para la capa de presentación,
    /// el núcleo no lo consume.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            right_arm_action: SlideCommand::Next,
            left_arm_action: SlideCommand::Previous,
            sensitivity: 0.05,
            cooldown_secs: 1.0,
            use_arrow_keys: true,
            mirror_camera: false,
            show_debug: true,
            language: "en".to_string(),
        }
    }
}

impl Config {
    /// Comprueba los invariantes del registro. El núcleo asume una
    /// configuración ya validada y nunca vuelve a comprobarla.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.right_arm_action == self.left_arm_action {
            return Err(ConfigError::MirroredActions(self.right_arm_action));
        }
        range_check(
            "sensitivity",
            self.sensitivity,
            SENSITIVITY_MIN,
            SENSITIVITY_MAX,
        )?;
        range_check(
            "cooldown_secs",
            self.cooldown_secs,
            COOLDOWN_MIN,
            COOLDOWN_MAX,
        )?;
        Ok(())
    }

    /// Repara un registro recién cargado: recorta los valores numéricos a su
    /// rango y restaura el par de acciones por defecto si ambas colisionan.
    /// Tras reparar, `validate()` siempre se cumple.
    pub fn repaired(mut self) -> Self {
        self.sensitivity = self.sensitivity.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
        self.cooldown_secs = self.cooldown_secs.clamp(COOLDOWN_MIN, COOLDOWN_MAX);
        if self.right_arm_action == self.left_arm_action {
            let defaults = Config::default();
            self.right_arm_action = defaults.right_arm_action;
            self.left_arm_action = defaults.left_arm_action;
        }
        self
    }
}

fn range_check(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Carga la configuración persistida fusionada sobre los defaults.
/// Archivo ausente o JSON inválido caen silenciosamente a los defaults;
/// los campos omitidos toman su valor por defecto uno a uno.
pub fn load_config(path: impl AsRef<Path>) -> Config {
    let raw = match fs::read_to_string(path.as_ref()) {
        Ok(raw) => raw,
        Err(_) => return Config::default(),
    };

    match serde_json::from_str::<Config>(&raw) {
        Ok(config) => config.repaired(),
        Err(_) => Config::default(),
    }
}

/// Escribe el registro completo como JSON legible.
pub fn save_config(path: impl AsRef<Path>, config: &Config) -> Result<(), ConfigError> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}
