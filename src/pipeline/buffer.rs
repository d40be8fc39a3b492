use crate::core::Rgba;
use crate::error::FramebufferError;
use glam::Vec4;

/// Owned RGBA float framebuffer.
///
/// Row-major with the origin at the bottom-left: index `x + y * width` with
/// `y == 0` being the bottom row. `len() == width * height` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    data: Vec<Rgba>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, FramebufferError> {
        Ok(Self {
            width,
            height,
            data: Self::allocate_storage(width, height)?,
        })
    }

    /// Replace the storage with a fresh `width * height` buffer.
    ///
    /// Previous contents are dropped, never copied across. On error the
    /// current buffer is left as it was.
    pub fn allocate(&mut self, width: usize, height: usize) -> Result<(), FramebufferError> {
        self.data = Self::allocate_storage(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn allocate_storage(width: usize, height: usize) -> Result<Vec<Rgba>, FramebufferError> {
        if width == 0 || height == 0 {
            return Err(FramebufferError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(FramebufferError::AllocationFailure { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| FramebufferError::AllocationFailure { width, height })?;
        data.resize(len, Vec4::ZERO);
        Ok(data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Result<usize, FramebufferError> {
        if x < self.width && y < self.height {
            Ok(x + y * self.width)
        } else {
            Err(FramebufferError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<&Rgba, FramebufferError> {
        let index = self.index(x, y)?;
        Ok(&self.data[index])
    }

    pub fn pixel_at(&mut self, x: usize, y: usize) -> Result<&mut Rgba, FramebufferError> {
        let index = self.index(x, y)?;
        Ok(&mut self.data[index])
    }

    pub fn fill(&mut self, color: Rgba) {
        self.data.fill(color);
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.data
    }

    /// Whole buffer, for passes that cover every pixel and need no per-pixel checks.
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.data
    }

    /// Rows from the bottom of the image up.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgba> {
        self.data.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::{rgb, WHITE};

    #[test]
    fn allocates_width_times_height() {
        let fb = Framebuffer::new(1360, 768).unwrap();
        assert_eq!(fb.len(), 1_044_480);
        assert_eq!((fb.width(), fb.height()), (1360, 768));
    }

    #[test]
    fn reallocation_discards_contents() {
        let mut fb = Framebuffer::new(1360, 768).unwrap();
        fb.fill(WHITE);

        fb.allocate(640, 480).unwrap();
        assert_eq!(fb.len(), 307_200);
        assert!(fb.pixels().iter().all(|p| *p == Vec4::ZERO));

        fb.fill(WHITE);
        fb.allocate(640, 480).unwrap();
        assert_eq!(fb.len(), 307_200);
        assert!(fb.pixels().iter().all(|p| *p == Vec4::ZERO));
    }

    #[test]
    fn zero_dimensions_are_rejected_without_touching_the_buffer() {
        let mut fb = Framebuffer::new(4, 3).unwrap();
        fb.fill(WHITE);
        assert_eq!(
            fb.allocate(0, 10),
            Err(FramebufferError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!((fb.width(), fb.height(), fb.len()), (4, 3, 12));
        assert!(fb.pixels().iter().all(|p| *p == WHITE));
        assert!(Framebuffer::new(7, 0).is_err());
    }

    #[test]
    fn overflowing_size_is_an_allocation_failure() {
        assert_eq!(
            Framebuffer::new(usize::MAX, 2),
            Err(FramebufferError::AllocationFailure {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn single_pixel_buffer() {
        let mut fb = Framebuffer::new(1, 1).unwrap();
        assert_eq!(fb.len(), 1);
        *fb.pixel_at(0, 0).unwrap() = rgb(0.25, 0.5, 0.75);
        assert_eq!(*fb.pixel(0, 0).unwrap(), rgb(0.25, 0.5, 0.75));
        assert!(fb.pixel_at(1, 0).is_err());
        assert!(fb.pixel_at(0, 1).is_err());
    }

    #[test]
    fn out_of_range_access_reports_the_dimensions() {
        let mut fb = Framebuffer::new(8, 2).unwrap();
        assert_eq!(
            fb.pixel_at(8, 1).unwrap_err(),
            FramebufferError::IndexOutOfRange {
                x: 8,
                y: 1,
                width: 8,
                height: 2
            }
        );
    }

    #[test]
    fn rows_start_at_the_bottom() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        *fb.pixel_at(2, 0).unwrap() = WHITE;
        let rows: Vec<_> = fb.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], WHITE);
        assert_eq!(rows[1][2], Vec4::ZERO);
    }
}
