use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use csv::ReaderBuilder;

use crate::types::PoseLandmarks;

/// Un frame de una pista grabada: timestamp en segundos de sesión y pose
/// opcional (las cuatro y vacías en el CSV = sin pose ese frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackFrame {
    pub t: f64,
    pub pose: Option<PoseLandmarks>,
}

/// Carga una pista de landmarks desde un CSV con el formato
/// `t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y`,
/// con timestamps no decrecientes. El CSV solo registra coordenadas y;
/// la x no participa en la clasificación y se rellena con 0.
pub fn load_track_from_csv(path: impl AsRef<Path>) -> Result<Vec<TrackFrame>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("No se pudo abrir la pista {:?}", path))?;

    let mut frames = Vec::new();
    let mut last_t = f64::NEG_INFINITY;

    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("Fila {} inválida en {:?}", row_idx + 1, path))?;
        if record.len() < 5 {
            bail!("La fila {} no tiene 5 columnas", row_idx + 1);
        }

        let t: f64 = record[0]
            .trim()
            .parse()
            .with_context(|| format!("t inválido en fila {}", row_idx + 1))?;
        ensure!(
            t >= last_t,
            "Timestamp fuera de orden en fila {}: {} < {}",
            row_idx + 1,
            t,
            last_t
        );
        last_t = t;

        let raw: Vec<&str> = (1..5).map(|i| record[i].trim()).collect();
        let empty_count = raw.iter().filter(|field| field.is_empty()).count();

        let pose = match empty_count {
            4 => None,
            0 => {
                let mut ys = [0.0f32; 4];
                for (slot, field) in ys.iter_mut().zip(&raw) {
                    *slot = field.parse().with_context(|| {
                        format!("Coordenada inválida en fila {}: {:?}", row_idx + 1, field)
                    })?;
                }
                Some(PoseLandmarks {
                    left_shoulder: (0.0, ys[0]),
                    right_shoulder: (0.0, ys[1]),
                    left_wrist: (0.0, ys[2]),
                    right_wrist: (0.0, ys[3]),
                })
            }
            _ => bail!(
                "La fila {} mezcla campos vacíos y valores (pose parcial)",
                row_idx + 1
            ),
        };

        frames.push(TrackFrame { t, pose });
    }

    if frames.is_empty() {
        bail!("La pista {:?} no contiene frames", path);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_track(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_track() {
        let path = write_track(
            "handyslides_track_ok.csv",
            "t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y\n\
             0.0,0.50,0.50,0.40,0.80\n\
             0.5,0.50,0.50,0.40,0.80\n",
        );

        let track = load_track_from_csv(&path).unwrap();
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].t, 0.0);
        let pose = track[0].pose.unwrap();
        assert_eq!(pose.left_wrist.1, 0.40);
        assert_eq!(pose.right_wrist.1, 0.80);
    }

    #[test]
    fn test_empty_row_means_no_pose() {
        let path = write_track(
            "handyslides_track_nopose.csv",
            "t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y\n\
             0.0,,,,\n\
             0.1,0.50,0.50,0.80,0.80\n",
        );

        let track = load_track_from_csv(&path).unwrap();
        assert!(track[0].pose.is_none());
        assert!(track[1].pose.is_some());
    }

    #[test]
    fn test_partial_pose_row_is_rejected() {
        let path = write_track(
            "handyslides_track_partial.csv",
            "t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y\n\
             0.0,0.50,,0.40,0.80\n",
        );

        assert!(load_track_from_csv(&path).is_err());
    }

    #[test]
    fn test_out_of_order_timestamps_are_rejected() {
        let path = write_track(
            "handyslides_track_order.csv",
            "t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y\n\
             1.0,0.50,0.50,0.40,0.80\n\
             0.5,0.50,0.50,0.40,0.80\n",
        );

        assert!(load_track_from_csv(&path).is_err());
    }

    #[test]
    fn test_empty_track_is_rejected() {
        let path = write_track(
            "handyslides_track_empty.csv",
            "t,left_shoulder_y,right_shoulder_y,left_wrist_y,right_wrist_y\n",
        );

        assert!(load_track_from_csv(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_track_from_csv("/no/such/track.csv").is_err());
    }
}
