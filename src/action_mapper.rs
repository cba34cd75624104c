use crate::config::Config;
use crate::types::{GestureSide, OutputKey, SlideCommand};

/// Resuelve el lado clasificado a la acción configurada para ese brazo y a
/// la tecla que la expresa. `GestureSide::None` no produce nada.
pub fn resolve(side: GestureSide, config: &Config) -> Option<(SlideCommand, OutputKey)> {
    let command = match side {
        GestureSide::None => return None,
        GestureSide::Left => config.left_arm_action,
        GestureSide::Right => config.right_arm_action,
    };

    Some((command, output_key(command, config.use_arrow_keys)))
}

/// Tabla completa (comando, estilo de teclas) → tecla simbólica.
/// Total sobre las cuatro combinaciones, sin rama por defecto.
pub fn output_key(command: SlideCommand, use_arrow_keys: bool) -> OutputKey {
    match (command, use_arrow_keys) {
        (SlideCommand::Next, true) => OutputKey::RightArrow,
        (SlideCommand::Previous, true) => OutputKey::LeftArrow,
        (SlideCommand::Next, false) => OutputKey::PageDown,
        (SlideCommand::Previous, false) => OutputKey::PageUp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_side_resolves_to_nothing() {
        assert_eq!(resolve(GestureSide::None, &Config::default()), None);
    }

    #[test]
    fn test_default_config_mapping() {
        let config = Config::default();

        let (command, key) = resolve(GestureSide::Right, &config).unwrap();
        assert_eq!(command, SlideCommand::Next);
        assert_eq!(key, OutputKey::RightArrow);

        let (command, key) = resolve(GestureSide::Left, &config).unwrap();
        assert_eq!(command, SlideCommand::Previous);
        assert_eq!(key, OutputKey::LeftArrow);
    }

    #[test]
    fn test_swapped_arm_actions() {
        let config = Config {
            right_arm_action: SlideCommand::Previous,
            left_arm_action: SlideCommand::Next,
            ..Config::default()
        };

        let (command, _) = resolve(GestureSide::Right, &config).unwrap();
        assert_eq!(command, SlideCommand::Previous);
        let (command, _) = resolve(GestureSide::Left, &config).unwrap();
        assert_eq!(command, SlideCommand::Next);
    }

    #[test]
    fn test_both_sides_cover_next_and_previous() {
        // Con cualquier configuración válida los dos brazos producen entre
        // ambos exactamente un Next y un Previous
        for config in [
            Config::default(),
            Config {
                right_arm_action: SlideCommand::Previous,
                left_arm_action: SlideCommand::Next,
                ..Config::default()
            },
        ] {
            let (left, _) = resolve(GestureSide::Left, &config).unwrap();
            let (right, _) = resolve(GestureSide::Right, &config).unwrap();
            assert_ne!(left, right);
        }
    }

    #[test]
    fn test_key_table_is_total() {
        assert_eq!(output_key(SlideCommand::Next, true), OutputKey::RightArrow);
        assert_eq!(output_key(SlideCommand::Previous, true), OutputKey::LeftArrow);
        assert_eq!(output_key(SlideCommand::Next, false), OutputKey::PageDown);
        assert_eq!(output_key(SlideCommand::Previous, false), OutputKey::PageUp);
    }

    #[test]
    fn test_paging_keys() {
        let config = Config {
            use_arrow_keys: false,
            ..Config::default()
        };

        let (_, key) = resolve(GestureSide::Right, &config).unwrap();
        assert_eq!(key, OutputKey::PageDown);
        let (_, key) = resolve(GestureSide::Left, &config).unwrap();
        assert_eq!(key, OutputKey::PageUp);
    }
}
