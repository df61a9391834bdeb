//! Framebuffer for render output.

use std::path::Path;

use glint_core::Color;

/// Convert an unclamped linear color to 8-bit RGBA.
///
/// Clamping happens only here; the traced colors themselves stay
/// unclamped. Values are linear, no gamma mapping.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let r = (255.0 * color.x.clamp(0.0, 1.0)) as u8;
    let g = (255.0 * color.y.clamp(0.0, 1.0)) as u8;
    let b = (255.0 * color.z.clamp(0.0, 1.0)) as u8;
    [r, g, b, 255]
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y); (0, 0) is the top-left corner.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGBA bytes (for display or saving).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgba(*color));
        }
        bytes
    }

    /// Write the buffer to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let mut image = ImageBuffer::new(4, 4);
        image.set(2, 3, Color::new(0.1, 0.2, 0.3));
        assert_eq!(image.get(2, 3), Color::new(0.1, 0.2, 0.3));
        assert_eq!(image.get(0, 0), Color::ZERO);
    }

    #[test]
    fn test_color_to_rgba_clamps() {
        // Overbright and negative channels clamp at conversion
        let rgba = color_to_rgba(Color::new(2.0, -1.0, 0.5));
        assert_eq!(rgba[0], 255);
        assert_eq!(rgba[1], 0);
        assert_eq!(rgba[2], 127);
        assert_eq!(rgba[3], 255);
    }

    #[test]
    fn test_to_rgba_length() {
        let image = ImageBuffer::new(3, 2);
        assert_eq!(image.to_rgba().len(), 3 * 2 * 4);
    }
}
