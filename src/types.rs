use std::fmt;

use serde::{Deserialize, Serialize};

/// Salida cruda del estimador de pose para un frame: los cuatro landmarks
/// que sigue el sistema (hombros y muñecas de MediaPipe Pose: índices
/// 11, 12, 15 y 16), como pares (x, y) normalizados al encuadre de la cámara.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseLandmarks {
    pub left_shoulder: (f32, f32),
    pub right_shoulder: (f32, f32),
    pub left_wrist: (f32, f32),
    pub right_wrist: (f32, f32),
}

/// Las cuatro coordenadas y que necesita el clasificador.
/// Origen arriba a la izquierda: y menor = más arriba en la imagen.
/// Se construye fresco en cada frame, nunca se retiene entre frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkFrame {
    pub left_shoulder_y: f32,
    pub right_shoulder_y: f32,
    pub left_wrist_y: f32,
    pub right_wrist_y: f32,
}

impl LandmarkFrame {
    /// Intercambia lados izquierdo/derecho (cámara en espejo).
    pub fn mirrored(self) -> Self {
        Self {
            left_shoulder_y: self.right_shoulder_y,
            right_shoulder_y: self.left_shoulder_y,
            left_wrist_y: self.right_wrist_y,
            right_wrist_y: self.left_wrist_y,
        }
    }

    /// Líneas de depuración con las coordenadas crudas, como las muestra
    /// el overlay cuando `show_debug` está activo.
    pub fn debug_lines(&self) -> String {
        format!(
            "L.Shoulder.y: {:.3}, L.Wrist.y: {:.3}\nR.Shoulder.y: {:.3}, R.Wrist.y: {:.3}",
            self.left_shoulder_y, self.left_wrist_y, self.right_shoulder_y, self.right_wrist_y
        )
    }
}

/// Qué brazo (si alguno) se considera levantado en el frame actual.
/// Valor derivado por el clasificador, nunca almacenado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSide {
    None,
    Left,
    Right,
}

impl fmt::Display for GestureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GestureSide::None => "None",
            GestureSide::Left => "Left",
            GestureSide::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Acción abstracta sobre la presentación, independiente de la tecla física.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideCommand {
    Next,
    Previous,
}

impl fmt::Display for SlideCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlideCommand::Next => "Next",
            SlideCommand::Previous => "Previous",
        };
        write!(f, "{}", s)
    }
}

/// Tecla simbólica que el despachador HID traduce a una pulsación real.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKey {
    LeftArrow,
    RightArrow,
    PageUp,
    PageDown,
}

impl OutputKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKey::LeftArrow => "left-arrow",
            OutputKey::RightArrow => "right-arrow",
            OutputKey::PageUp => "page-up",
            OutputKey::PageDown => "page-down",
        }
    }
}

impl fmt::Display for OutputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Única salida observable del núcleo por cada frame con gesto.
/// Solo `Fired` llega al despachador de teclas; `Suppressed` es
/// informativo para el overlay de cooldown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchEvent {
    None,
    Fired {
        command: SlideCommand,
        key: OutputKey,
    },
    Suppressed {
        remaining: f64,
    },
}
