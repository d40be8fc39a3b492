mod winbuffer;
pub use winbuffer::WinBuffer;

use crate::config::Config;
use crate::core::{SpecialKey, KEY_ESCAPE};
use crate::error::{Error, Result};
use crate::pipeline::Framebuffer;
use crate::renderers::schedule::{Due, EventSchedule};
use crate::renderers::{Event, WindowHost};
use log::{debug, info, trace};
use minifb::{Key, KeyRepeat, MouseMode, Scale, Window, WindowOptions};
use std::thread;
use std::time::{Duration, Instant};

/// Window host backed by minifb.
///
/// minifb has no callbacks, so this host turns its polling API into the
/// event stream the app expects: resizes are spotted by comparing window
/// sizes, and timers are deadlines slept to. Ordering is [`EventSchedule`]'s.
pub struct MinifbHost {
    window: Option<Window>,
    buffer: WinBuffer,
    viewport: (usize, usize),
    size: (usize, usize),
    schedule: EventSchedule,
    input_fresh: bool,
    close_reported: bool,
}

impl MinifbHost {
    pub fn new(config: &Config) -> Result<Self> {
        let opts = WindowOptions {
            resize: true,
            scale: Scale::X1,
            title: true,
            borderless: false,
            ..WindowOptions::default()
        };
        let window = Window::new(&config.title, config.width, config.height, opts)
            .map_err(Error::Window)?;
        let size = window.get_size();
        debug!("Window created with size {}x{}", size.0, size.1);

        let mut schedule = EventSchedule::default();
        schedule.push(Event::Resize {
            width: size.0,
            height: size.1,
        });

        Ok(Self {
            window: Some(window),
            buffer: WinBuffer::new(size.0, size.1),
            viewport: size,
            size,
            schedule,
            input_fresh: false,
            close_reported: false,
        })
    }

    /// Queue whatever happened to the window since the last pump.
    fn pump(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if !self.input_fresh {
            window.update();
        }
        self.input_fresh = false;

        if !window.is_open() {
            if !self.close_reported {
                self.close_reported = true;
                self.schedule.push(Event::CloseRequested);
            }
            return;
        }

        let size = window.get_size();
        if size != self.size {
            self.size = size;
            self.schedule.push(Event::Resize {
                width: size.0,
                height: size.1,
            });
        }

        let (x, y) = window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x as i32, y as i32))
            .unwrap_or((0, 0));
        for key in window.get_keys_pressed(KeyRepeat::Yes) {
            match translate_key(key) {
                Some(KeyInput::Standard(code)) => {
                    self.schedule.push(Event::Key { code, x, y })
                }
                Some(KeyInput::Special(key)) => {
                    self.schedule.push(Event::SpecialKey { key, x, y })
                }
                None => trace!("No key code for {:?}", key),
            }
        }
    }
}

impl WindowHost for MinifbHost {
    fn next_event(&mut self) -> Option<Event> {
        match self.schedule.next_due()? {
            Due::Event(event) => Some(event),
            Due::TimerAt(deadline) => {
                let now = Instant::now();
                if deadline > now {
                    thread::sleep(deadline - now);
                }
                self.pump();
                Some(Event::Timer)
            }
        }
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<()> {
        let Some(window) = self.window.as_mut() else {
            return Err(Error::WindowClosed);
        };
        if (frame.width(), frame.height()) != self.viewport {
            debug!(
                "Frame {}x{} does not match viewport {}x{}",
                frame.width(),
                frame.height(),
                self.viewport.0,
                self.viewport.1
            );
        }
        self.buffer.pack(frame);
        window
            .update_with_buffer(&self.buffer.data, self.buffer.width, self.buffer.height)
            .map_err(Error::Present)?;
        self.input_fresh = true;
        Ok(())
    }

    fn request_redraw(&mut self) {
        self.schedule.request_redraw();
    }

    fn schedule_timer(&mut self, delay: Duration) {
        self.schedule.schedule_timer(Instant::now() + delay);
    }

    fn set_viewport(&mut self, width: usize, height: usize) {
        self.viewport = (width, height);
        self.buffer.resize(width, height);
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = self.window.as_mut() {
            window.set_title(title);
        }
    }

    fn request_window_close(&mut self) {
        if self.window.take().is_some() {
            info!("Window destroyed");
        }
        self.schedule.close();
    }

    fn request_process_exit(&mut self) {
        self.schedule.request_exit();
    }
}

enum KeyInput {
    Standard(u8),
    Special(SpecialKey),
}

fn translate_key(key: Key) -> Option<KeyInput> {
    use KeyInput::{Special, Standard};
    let input = match key {
        Key::Escape => Standard(KEY_ESCAPE),
        Key::Enter | Key::NumPadEnter => Standard(b'\r'),
        Key::Space => Standard(b' '),
        Key::Backspace => Standard(8),
        Key::Tab => Standard(b'\t'),
        Key::Delete => Standard(127),
        Key::Key0 | Key::NumPad0 => Standard(b'0'),
        Key::Key1 | Key::NumPad1 => Standard(b'1'),
        Key::Key2 | Key::NumPad2 => Standard(b'2'),
        Key::Key3 | Key::NumPad3 => Standard(b'3'),
        Key::Key4 | Key::NumPad4 => Standard(b'4'),
        Key::Key5 | Key::NumPad5 => Standard(b'5'),
        Key::Key6 | Key::NumPad6 => Standard(b'6'),
        Key::Key7 | Key::NumPad7 => Standard(b'7'),
        Key::Key8 | Key::NumPad8 => Standard(b'8'),
        Key::Key9 | Key::NumPad9 => Standard(b'9'),
        Key::A => Standard(b'a'),
        Key::B => Standard(b'b'),
        Key::C => Standard(b'c'),
        Key::D => Standard(b'd'),
        Key::E => Standard(b'e'),
        Key::F => Standard(b'f'),
        Key::G => Standard(b'g'),
        Key::H => Standard(b'h'),
        Key::I => Standard(b'i'),
        Key::J => Standard(b'j'),
        Key::K => Standard(b'k'),
        Key::L => Standard(b'l'),
        Key::M => Standard(b'm'),
        Key::N => Standard(b'n'),
        Key::O => Standard(b'o'),
        Key::P => Standard(b'p'),
        Key::Q => Standard(b'q'),
        Key::R => Standard(b'r'),
        Key::S => Standard(b's'),
        Key::T => Standard(b't'),
        Key::U => Standard(b'u'),
        Key::V => Standard(b'v'),
        Key::W => Standard(b'w'),
        Key::X => Standard(b'x'),
        Key::Y => Standard(b'y'),
        Key::Z => Standard(b'z'),
        Key::F1 => Special(SpecialKey::F(1)),
        Key::F2 => Special(SpecialKey::F(2)),
        Key::F3 => Special(SpecialKey::F(3)),
        Key::F4 => Special(SpecialKey::F(4)),
        Key::F5 => Special(SpecialKey::F(5)),
        Key::F6 => Special(SpecialKey::F(6)),
        Key::F7 => Special(SpecialKey::F(7)),
        Key::F8 => Special(SpecialKey::F(8)),
        Key::F9 => Special(SpecialKey::F(9)),
        Key::F10 => Special(SpecialKey::F(10)),
        Key::F11 => Special(SpecialKey::F(11)),
        Key::F12 => Special(SpecialKey::F(12)),
        Key::Left => Special(SpecialKey::Left),
        Key::Up => Special(SpecialKey::Up),
        Key::Right => Special(SpecialKey::Right),
        Key::Down => Special(SpecialKey::Down),
        Key::PageUp => Special(SpecialKey::PageUp),
        Key::PageDown => Special(SpecialKey::PageDown),
        Key::Home => Special(SpecialKey::Home),
        Key::End => Special(SpecialKey::End),
        Key::Insert => Special(SpecialKey::Insert),
        _ => return None,
    };
    Some(input)
}
