use std::time::Duration;

use uinput::device::Device;
use uinput::event::keyboard;

use crate::types::OutputKey;

/// Teclado virtual por /dev/uinput. Despacha la pulsación que expresa cada
/// tecla simbólica del núcleo; el envío es fire-and-forget, sin reintentos.
pub struct KeyOutput {
    dev: Device,
}

impl KeyOutput {
    pub fn new() -> Result<Self, uinput::Error> {
        let dev = uinput::default()?
            .name("handyslides-hid")?
            .event(uinput::event::Keyboard::All)?
            .create()?;

        Ok(KeyOutput { dev })
    }

    fn sync(&mut self) -> Result<(), uinput::Error> {
        self.dev.synchronize()
    }

    fn key_tap(&mut self, key: keyboard::Key) -> Result<(), uinput::Error> {
        self.dev.press(&keyboard::Keyboard::Key(key))?;
        self.sync()?;
        std::thread::sleep(Duration::from_millis(10));
        self.dev.release(&keyboard::Keyboard::Key(key))?;
        self.sync()
    }

    pub fn send(&mut self, key: OutputKey) -> Result<(), uinput::Error> {
        match key {
            OutputKey::LeftArrow => self.key_tap(keyboard::Key::Left),
            OutputKey::RightArrow => self.key_tap(keyboard::Key::Right),
            OutputKey::PageUp => self.key_tap(keyboard::Key::PageUp),
            OutputKey::PageDown => self.key_tap(keyboard::Key::PageDown),
        }
    }
}
