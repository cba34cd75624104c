use crate::action_mapper;
use crate::config::Config;
use crate::debounce::{DebounceGate, FireDecision};
use crate::gesture_classifier;
use crate::types::{DispatchEvent, GestureSide, LandmarkFrame};

/// Resultado de un ciclo de frame: el evento despachable más el contexto
/// necesario para el texto de estado del overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub side: GestureSide,
    pub pose_detected: bool,
    pub event: DispatchEvent,
}

impl FrameOutcome {
    /// Línea de estado legible para el overlay / log. Distingue "sin pose"
    /// de "pose detectada pero ningún brazo levantado".
    pub fn status_line(&self) -> String {
        match self.event {
            DispatchEvent::Fired { command, key } => {
                format!("{} arm raised! Action: {} -> Key: {}", self.side, command, key)
            }
            DispatchEvent::Suppressed { remaining } => {
                format!("{} arm raised (cooldown: {:.2}s left)", self.side, remaining)
            }
            DispatchEvent::None if self.pose_detected => "No arm raised.".to_string(),
            DispatchEvent::None => "Pose not detected.".to_string(),
        }
    }
}

/// Orquesta clasificador, mapeador y gate una vez por frame capturado.
/// Síncrono y de un solo hilo: cada ciclo corre a término antes del
/// siguiente, y por cada frame se emite cero o un evento de despacho.
pub struct GestureController {
    config: Config,
    gate: DebounceGate,
}

impl GestureController {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            gate: DebounceGate::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Procesa un frame con timestamp monotónico `now` (segundos de sesión).
    /// Un frame sin gesto nunca llega al gate: no consume su estado.
    pub fn on_frame(&mut self, frame: Option<&LandmarkFrame>, now: f64) -> FrameOutcome {
        let side = gesture_classifier::classify(frame, self.config.sensitivity);
        let pose_detected = frame.is_some();

        match action_mapper::resolve(side, &self.config) {
            None => FrameOutcome {
                side,
                pose_detected,
                event: DispatchEvent::None,
            },
            Some((command, key)) => {
                let event = match self.gate.try_fire(true, now, self.config.cooldown_secs) {
                    FireDecision::Fire => DispatchEvent::Fired { command, key },
                    FireDecision::Suppressed { remaining } => DispatchEvent::Suppressed { remaining },
                    FireDecision::Idle => DispatchEvent::None,
                };
                FrameOutcome {
                    side,
                    pose_detected,
                    event,
                }
            }
        }
    }
}
