/*
HandySlides - Control de presentaciones por gestos de brazo

Sistema que:
1. Recibe landmarks de pose por frame (pista CSV grabada o modo debug)
2. Clasifica si hay un brazo levantado (muñeca sobre hombro + zona muerta)
3. Mapea el lado al comando configurado (siguiente/anterior diapositiva)
4. Aplica debounce y emite la pulsación de tecla por /dev/uinput

Para ejecutar con una pista grabada:
    ./target/release/handyslides pista.csv

Para debug con teclado:
    sg input -c './target/debug/handyslides'
*/

use std::env;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::{unbounded, Sender};

use handyslides::config::{load_config, save_config, Config};
use handyslides::controller::{FrameOutcome, GestureController};
use handyslides::csv_loader::load_track_from_csv;
use handyslides::hid::KeyOutput;
use handyslides::pose;
use handyslides::types::{DispatchEvent, LandmarkFrame, OutputKey};

const SETTINGS_FILE: &str = "handyslides_settings.json";

fn main() -> Result<()> {
    println!("🙌 HandySlides - Control de presentaciones por gestos\n");

    let config = load_config(SETTINGS_FILE);
    // load_config ya reparó el registro; esto solo protege el contrato del núcleo
    config.validate()?;

    if let Err(e) = save_config(SETTINGS_FILE, &config) {
        eprintln!("⚠️  No se pudo persistir la configuración: {}", e);
    }

    println!(
        "⚙️  Config: sensibilidad {}, cooldown {}s, teclas {}, espejo {}",
        config.sensitivity,
        config.cooldown_secs,
        if config.use_arrow_keys { "flechas" } else { "paginación" },
        if config.mirror_camera { "sí" } else { "no" },
    );

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("🔧 Modo: DEBUG - Teclado Interactivo\n");
        return debug_mode(config);
    }

    let track_path = PathBuf::from(&args[1]);
    println!("🔧 Modo: Replay de pista");
    println!("🎞️  Pista: {:?}\n", track_path);
    replay_session(config, &track_path)
}

/// Lanza el hilo HID y devuelve el canal por el que se le envían teclas.
/// El envío es fire-and-forget: un fallo se reporta y no se reintenta.
fn spawn_key_sender() -> Sender<OutputKey> {
    let (tx, rx) = unbounded::<OutputKey>();

    std::thread::spawn(move || {
        let mut hid = match KeyOutput::new() {
            Ok(h) => {
                println!("✅ HID inicializado (/dev/uinput)");
                h
            }
            Err(e) => {
                eprintln!("❌ No se pudo inicializar HID: {}", e);
                return;
            }
        };

        while let Ok(key) = rx.recv() {
            if let Err(e) = hid.send(key) {
                eprintln!("❌ Error enviando tecla {}: {}", key, e);
            }
        }
    });

    tx
}

/// Reporta el resultado de un frame y despacha la tecla si hubo disparo.
fn handle_outcome(
    outcome: &FrameOutcome,
    frame: Option<&LandmarkFrame>,
    show_debug: bool,
    tx: &Sender<OutputKey>,
) {
    if show_debug {
        if let Some(frame) = frame {
            println!("{}", frame.debug_lines());
        }
    }

    match outcome.event {
        DispatchEvent::Fired { key, .. } => {
            println!("🎯 {}", outcome.status_line());
            let _ = tx.send(key);
        }
        DispatchEvent::Suppressed { .. } => {
            println!("⏳ {}", outcome.status_line());
        }
        DispatchEvent::None => {
            if show_debug {
                println!("{}", outcome.status_line());
            }
        }
    }
}

/// Reproduce una pista grabada a sus timestamps originales a través del
/// pipeline completo, incluida la salida HID.
fn replay_session(config: Config, track_path: &Path) -> Result<()> {
    let track = load_track_from_csv(track_path)?;
    println!("✅ Pista cargada: {} frames\n", track.len());

    let tx = spawn_key_sender();
    let mirror = config.mirror_camera;
    let show_debug = config.show_debug;
    let mut controller = GestureController::new(config);

    let start = Instant::now();
    for track_frame in track {
        // Esperar al timestamp grabado del frame
        let target = Duration::from_secs_f64(track_frame.t.max(0.0));
        if let Some(wait) = target.checked_sub(start.elapsed()) {
            std::thread::sleep(wait);
        }

        let frame = pose::adapt(track_frame.pose.as_ref(), mirror);
        let outcome = controller.on_frame(frame.as_ref(), track_frame.t);
        handle_outcome(&outcome, frame.as_ref(), show_debug, &tx);
    }

    println!("\n👋 Fin de la pista");
    Ok(())
}

/// Modo DEBUG: captura el teclado global y reproduce pistas CSV grabadas
/// según la tecla pulsada, compartiendo el mismo gate de toda la sesión.
fn debug_mode(config: Config) -> Result<()> {
    use evdev::{Device, InputEventKind, Key};
    use std::fs;

    println!("🔍 Buscando teclado...");

    let mut keyboard_device: Option<Device> = None;

    for entry in fs::read_dir("/dev/input")? {
        if let Ok(entry) = entry {
            let path = entry.path();
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with("event") {
                    if let Ok(device) = Device::open(&path) {
                        if let Some(dev_name) = device.name() {
                            let dev_name_lc = dev_name.to_lowercase();
                            if dev_name_lc.contains("keyboard")
                                || dev_name_lc.contains("at translated")
                            {
                                println!(
                                    "✅ Teclado encontrado: {} ({})",
                                    dev_name,
                                    path.display()
                                );
                                keyboard_device = Some(device);
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    let mut device = keyboard_device.ok_or_else(|| {
        anyhow::anyhow!("No se encontró ningún dispositivo de teclado en /dev/input")
    })?;

    println!("✅ Captura de teclado global activada\n");

    let tx = spawn_key_sender();
    let mirror = config.mirror_camera;
    let show_debug = config.show_debug;
    let mut controller = GestureController::new(config);
    let session_start = Instant::now();

    println!("Presiona teclas para simular frames de pose:");
    println!("  l → pistas/brazo-izquierdo");
    println!("  r → pistas/brazo-derecho");
    println!("  n → pistas/sin-pose");
    println!("  q → salir\n");

    let key_to_folder: std::collections::HashMap<Key, (&str, &str)> = [
        (Key::KEY_L, ("pistas/brazo-izquierdo", "l")),
        (Key::KEY_R, ("pistas/brazo-derecho", "r")),
        (Key::KEY_N, ("pistas/sin-pose", "n")),
    ]
    .iter()
    .cloned()
    .collect();

    println!("🎧 Escuchando teclas globales...\n");

    loop {
        for ev in device.fetch_events()? {
            if let InputEventKind::Key(key) = ev.kind() {
                if ev.value() == 1 {
                    if key == Key::KEY_Q {
                        println!("\n👋 Saliendo...");
                        return Ok(());
                    }

                    if let Some((folder_name, key_char)) = key_to_folder.get(&key) {
                        println!("\n🔑 Tecla presionada: '{}'", key_char);
                        println!("📂 Buscando pista en: {}/", folder_name);

                        let folder_path = PathBuf::from(folder_name);
                        if !folder_path.exists() {
                            eprintln!("❌ Carpeta no existe: {}", folder_name);
                            continue;
                        }

                        let csv_files: Vec<PathBuf> = fs::read_dir(&folder_path)?
                            .filter_map(|entry| entry.ok())
                            .map(|entry| entry.path())
                            .filter(|path| {
                                path.extension()
                                    .and_then(|ext| ext.to_str())
                                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                                    .unwrap_or(false)
                            })
                            .collect();

                        if csv_files.is_empty() {
                            eprintln!("❌ No hay pistas CSV en {}", folder_name);
                            continue;
                        }

                        use rand::Rng;
                        let random_idx = rand::thread_rng().gen_range(0..csv_files.len());
                        let csv_path = &csv_files[random_idx];
                        let file_name = csv_path
                            .file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("unknown.csv");

                        println!("📄 Pista: {}", file_name);

                        match load_track_from_csv(csv_path) {
                            Ok(track) => {
                                // Los frames se procesan contra el reloj de
                                // sesión: el cooldown aplica también entre
                                // pulsaciones de tecla sucesivas
                                for track_frame in track {
                                    let now = session_start.elapsed().as_secs_f64();
                                    let frame = pose::adapt(track_frame.pose.as_ref(), mirror);
                                    let outcome = controller.on_frame(frame.as_ref(), now);
                                    handle_outcome(&outcome, frame.as_ref(), show_debug, &tx);
                                }
                            }
                            Err(e) => {
                                eprintln!("❌ Error cargando pista: {}", e);
                            }
                        }
                    }
                }
            }
        }

        std::thread::sleep(Duration::from_millis(10));
    }
}
