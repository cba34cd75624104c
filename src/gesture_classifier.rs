use crate::types::{GestureSide, LandmarkFrame};

/// Clasifica el frame actual: una muñeca por encima de su hombro más la zona
/// muerta de `sensitivity` cuenta como brazo levantado (y menor = más arriba).
///
/// El lado izquierdo se evalúa primero: si ambos brazos superan el umbral en
/// el mismo frame gana `Left`. Es el comportamiento observado en el sistema
/// original y se conserva tal cual.
///
/// Función pura y total: no valida `sensitivity` (eso es responsabilidad de
/// la configuración al construirse) y no retiene nada entre frames.
pub fn classify(frame: Option<&LandmarkFrame>, sensitivity: f32) -> GestureSide {
    let Some(frame) = frame else {
        return GestureSide::None;
    };

    if frame.left_wrist_y < frame.left_shoulder_y - sensitivity {
        return GestureSide::Left;
    }

    if frame.right_wrist_y < frame.right_shoulder_y - sensitivity {
        return GestureSide::Right;
    }

    GestureSide::None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENSITIVITY: f32 = 0.05;

    fn frame_at_rest() -> LandmarkFrame {
        LandmarkFrame {
            left_shoulder_y: 0.50,
            right_shoulder_y: 0.50,
            left_wrist_y: 0.80,
            right_wrist_y: 0.80,
        }
    }

    #[test]
    fn test_absent_frame_is_none() {
        assert_eq!(classify(None, SENSITIVITY), GestureSide::None);
        assert_eq!(classify(None, 0.0), GestureSide::None);
        assert_eq!(classify(None, 0.15), GestureSide::None);
    }

    #[test]
    fn test_arms_down_is_none() {
        assert_eq!(classify(Some(&frame_at_rest()), SENSITIVITY), GestureSide::None);
    }

    #[test]
    fn test_left_arm_raised() {
        let mut frame = frame_at_rest();
        frame.left_wrist_y = 0.40;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::Left);
    }

    #[test]
    fn test_right_arm_raised() {
        let mut frame = frame_at_rest();
        frame.right_wrist_y = 0.40;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::Right);
    }

    #[test]
    fn test_threshold_is_strict() {
        let eps = 0.001;
        let mut frame = frame_at_rest();

        // Justo por encima del umbral: levantado
        frame.left_wrist_y = frame.left_shoulder_y - SENSITIVITY - eps;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::Left);

        // Exactamente en el umbral: no levantado (comparación estricta)
        frame.left_wrist_y = frame.left_shoulder_y - SENSITIVITY;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::None);

        // Justo por debajo del umbral: no levantado
        frame.left_wrist_y = frame.left_shoulder_y - SENSITIVITY + eps;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::None);
    }

    #[test]
    fn test_dead_zone_absorbs_arm_sway() {
        // Muñeca apenas por encima del hombro pero dentro de la zona muerta
        let mut frame = frame_at_rest();
        frame.right_wrist_y = frame.right_shoulder_y - 0.03;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::None);

        // Con una sensibilidad menor sí dispara
        assert_eq!(classify(Some(&frame), 0.02), GestureSide::Right);
    }

    #[test]
    fn test_left_wins_when_both_arms_raised() {
        let frame = LandmarkFrame {
            left_shoulder_y: 0.50,
            right_shoulder_y: 0.50,
            left_wrist_y: 0.30,
            right_wrist_y: 0.30,
        };
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::Left);
    }

    #[test]
    fn test_off_frame_wrist_accepted() {
        // Una muñeca fuera de encuadre puede salirse del rango nominal [0, 1]
        let mut frame = frame_at_rest();
        frame.left_wrist_y = -0.2;
        assert_eq!(classify(Some(&frame), SENSITIVITY), GestureSide::Left);
    }
}
