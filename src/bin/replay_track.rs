use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use handyslides::config::load_config;
use handyslides::controller::GestureController;
use handyslides::csv_loader::load_track_from_csv;
use handyslides::pose;
use handyslides::types::DispatchEvent;

struct ReplayOptions {
    dump_frames: bool,
}

fn parse_args() -> Result<(PathBuf, ReplayOptions)> {
    let mut dump_frames = false;
    let mut csv_path: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dump-frames" => dump_frames = true,
            _ => {
                if csv_path.is_some() {
                    bail!("Uso: replay_track [--dump-frames] <pista.csv>");
                }
                csv_path = Some(PathBuf::from(arg));
            }
        }
    }

    let csv_path = csv_path.ok_or_else(|| anyhow!("Debes especificar una pista CSV"))?;
    Ok((csv_path, ReplayOptions { dump_frames }))
}

/// Pasa una pista grabada por el núcleo completo sin salida HID y reporta
/// la decisión de cada frame. Útil para diagnosticar pistas y configuración.
fn main() -> Result<()> {
    let (csv_path, opts) = parse_args()?;
    println!("🎞️  Reproduciendo pista {:?} (sin HID)", csv_path);

    let config = load_config("handyslides_settings.json");
    config.validate()?;

    let track = load_track_from_csv(&csv_path)?;
    println!("✅ Pista cargada: {} frames\n", track.len());

    let mirror = config.mirror_camera;
    let mut controller = GestureController::new(config);

    let mut fired = 0usize;
    let mut suppressed = 0usize;
    let mut without_pose = 0usize;

    for track_frame in &track {
        let frame = pose::adapt(track_frame.pose.as_ref(), mirror);
        let outcome = controller.on_frame(frame.as_ref(), track_frame.t);

        match outcome.event {
            DispatchEvent::Fired { .. } => fired += 1,
            DispatchEvent::Suppressed { .. } => suppressed += 1,
            DispatchEvent::None => {
                if !outcome.pose_detected {
                    without_pose += 1;
                }
            }
        }

        if opts.dump_frames {
            if let Some(frame) = &frame {
                println!("{}", frame.debug_lines());
            }
        }

        println!("t={:7.3}  {}", track_frame.t, outcome.status_line());
    }

    println!(
        "\n📊 {} frames: {} disparos, {} suprimidos, {} sin pose",
        track.len(),
        fired,
        suppressed,
        without_pose
    );

    Ok(())
}
