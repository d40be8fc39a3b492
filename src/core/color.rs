use glam::Vec4;

/// RGBA color, channels in 0.0 - 1.0 (`x, y, z, w` = `r, g, b, a`).
pub type Rgba = Vec4;

/// What the render step clears to before drawing.
pub const CLEAR: Rgba = Vec4::new(0.0, 0.4, 0.0, 0.0);
pub const BLACK: Rgba = Vec4::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Rgba = Vec4::ONE;

pub trait PackedColor {
    /// Pack into `0x00RRGGBB`, the layout minifb expects. Alpha is dropped.
    fn to_u32(&self) -> u32;
}

impl PackedColor for Rgba {
    #[inline]
    fn to_u32(&self) -> u32 {
        let c = self.clamp(Vec4::ZERO, Vec4::ONE) * 255.0;
        let r = c.x as u32;
        let g = c.y as u32;
        let b = c.z as u32;
        (r << 16) | (g << 8) | b
    }
}

/// Opaque color from 0.0 - 1.0 components.
pub fn rgb(r: f32, g: f32, b: f32) -> Rgba {
    Vec4::new(r, g, b, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_primaries() {
        assert_eq!(rgb(1.0, 0.0, 0.0).to_u32(), 0x00FF0000);
        assert_eq!(rgb(0.0, 1.0, 0.0).to_u32(), 0x0000FF00);
        assert_eq!(rgb(0.0, 0.0, 1.0).to_u32(), 0x000000FF);
        assert_eq!(WHITE.to_u32(), 0x00FFFFFF);
        assert_eq!(BLACK.to_u32(), 0);
    }

    #[test]
    fn clamps_out_of_range_channels() {
        let c = Vec4::new(2.0, -1.0, 0.5, 7.0);
        assert_eq!(c.to_u32(), 0x00FF007F);
    }
}
