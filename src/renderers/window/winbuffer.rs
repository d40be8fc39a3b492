use crate::core::PackedColor;
use crate::pipeline::Framebuffer;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// `0x00RRGGBB` copy of a framebuffer laid out top row first, the way minifb
/// wants it.
pub struct WinBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

impl WinBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        WinBuffer {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.data.resize(width * height, 0);
    }

    /// Convert `frame` and flip it vertically.
    pub fn pack(&mut self, frame: &Framebuffer) {
        if frame.width() != self.width || frame.height() != self.height {
            self.resize(frame.width(), frame.height());
        }
        let (width, height) = (self.width, self.height);
        let pixels = frame.pixels();

        self.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                let start = (height - 1 - row) * width;
                for (dst, src) in out.iter_mut().zip(&pixels[start..start + width]) {
                    *dst = src.to_u32();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{rgb, WHITE};

    #[test]
    fn bottom_row_lands_last() {
        let mut frame = Framebuffer::new(2, 3).unwrap();
        *frame.pixel_at(0, 0).unwrap() = WHITE;
        *frame.pixel_at(1, 2).unwrap() = rgb(1.0, 0.0, 0.0);

        let mut buf = WinBuffer::new(0, 0);
        buf.pack(&frame);
        assert_eq!((buf.width, buf.height), (2, 3));
        assert_eq!(buf.data, vec![0, 0x00FF0000, 0, 0, 0x00FFFFFF, 0]);
    }

    #[test]
    fn follows_frame_size_changes() {
        let mut buf = WinBuffer::new(4, 4);
        let frame = Framebuffer::new(1, 1).unwrap();
        buf.pack(&frame);
        assert_eq!(buf.data.len(), 1);
    }
}
