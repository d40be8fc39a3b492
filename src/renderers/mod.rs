use crate::core::SpecialKey;
use crate::error::Result;
use crate::pipeline::Framebuffer;
use std::time::Duration;

pub mod schedule;
pub mod window;

#[cfg(test)]
pub(crate) mod recording;

pub use window::MinifbHost;

/// What a host delivers to the application, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A scheduled timer fired.
    Timer,
    /// A requested redraw is due; render one frame.
    Redraw,
    Resize { width: usize, height: usize },
    Key { code: u8, x: i32, y: i32 },
    SpecialKey { key: SpecialKey, x: i32, y: i32 },
    /// The user closed the window from outside the application.
    CloseRequested,
}

/// Everything the core needs from a window/display backend.
pub trait WindowHost {
    /// Block until the next event is due. `None` once the host has nothing
    /// left to deliver.
    fn next_event(&mut self) -> Option<Event>;

    /// Show a frame. Blocks until the display has taken it.
    fn present(&mut self, frame: &Framebuffer) -> Result<()>;
    fn request_redraw(&mut self);
    fn schedule_timer(&mut self, delay: Duration);
    fn set_viewport(&mut self, width: usize, height: usize);
    fn set_title(&mut self, _title: &str) {}
    fn request_window_close(&mut self);
    fn request_process_exit(&mut self);
}
