/// Decisión del gate para un frame con (o sin) candidato a disparo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireDecision {
    /// Dispara y consume el cooldown.
    Fire,
    /// Candidato dentro del cooldown; `remaining` en segundos para el overlay.
    Suppressed { remaining: f64 },
    /// Sin candidato este frame, el estado no se toca.
    Idle,
}

/// Única pieza con estado del núcleo: el timestamp del último disparo
/// aceptado, propiedad exclusiva de este gate. Los frames deben procesarse
/// estrictamente en orden de llegada (una sesión, un gate, un solo llamador).
#[derive(Debug, Default)]
pub struct DebounceGate {
    last_fire: Option<f64>,
}

impl DebounceGate {
    /// Gate recién creado: "nunca disparó", el primer candidato siempre pasa.
    pub fn new() -> Self {
        Self { last_fire: None }
    }

    /// Evalúa un frame. Dispara solo si `now - last_fire > cooldown_secs`
    /// (desigualdad estricta: un candidato exactamente en el límite del
    /// cooldown sigue suprimido, igual que el sistema original).
    pub fn try_fire(&mut self, have_candidate: bool, now: f64, cooldown_secs: f32) -> FireDecision {
        if !have_candidate {
            return FireDecision::Idle;
        }

        let cooldown = f64::from(cooldown_secs);
        let elapsed = match self.last_fire {
            Some(last) => now - last,
            None => {
                self.last_fire = Some(now);
                return FireDecision::Fire;
            }
        };

        if elapsed > cooldown {
            self.last_fire = Some(now);
            FireDecision::Fire
        } else {
            FireDecision::Suppressed {
                remaining: cooldown - elapsed,
            }
        }
    }

    /// Timestamp del último disparo aceptado, si hubo alguno.
    pub fn last_fire(&self) -> Option<f64> {
        self.last_fire
    }
}
