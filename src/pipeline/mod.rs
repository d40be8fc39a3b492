use crate::core::{color, Rgba};
use crate::error::Result;
use crate::renderers::WindowHost;

mod buffer;
pub mod noise;

pub use buffer::Framebuffer;
pub use noise::Noise;

/// Draw pass, run between the clear and the present.
///
/// Receives the whole framebuffer slice; implementations may assume every
/// index below `pixels.len()` is valid.
pub trait Painter {
    fn paint(&mut self, pixels: &mut [Rgba]);
}

impl<F: FnMut(&mut [Rgba])> Painter for F {
    fn paint(&mut self, pixels: &mut [Rgba]) {
        self(pixels)
    }
}

pub struct RenderStep<P: Painter> {
    pub clear_color: Rgba,
    painter: P,
}

impl<P: Painter> RenderStep<P> {
    pub fn new(painter: P) -> Self {
        Self {
            clear_color: color::CLEAR,
            painter,
        }
    }

    /// Clear, draw, then hand the frame to the host. Returns once the host has
    /// accepted it.
    pub fn render<H: WindowHost>(
        &mut self,
        frame: &mut Framebuffer,
        host: &mut H,
    ) -> Result<()> {
        self.draw(frame);
        host.present(frame)
    }

    /// Clear and draw without presenting.
    pub fn draw(&mut self, frame: &mut Framebuffer) {
        // Clear
        frame.fill(self.clear_color);

        // Draw
        self.painter.paint(frame.pixels_mut());
    }
}
