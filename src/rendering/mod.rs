//! Rendering pipeline: markup in, pixel buffer out.

pub mod layout;
pub mod paint;
pub mod raster;

use crate::error::{Error, Result};

/// An RGBA snapshot of a rendered region.
///
/// Created synchronously when an export is requested and discarded once the
/// document has been produced.
#[derive(Debug, Clone)]
pub struct PixelRegion {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA bytes, `width * height * 4` long
    pub pixels: Vec<u8>,
}

impl PixelRegion {
    /// A region filled with opaque white.
    pub fn blank(width: u32, height: u32) -> Self {
        let pixels = vec![0xFF; (width as usize) * (height as usize) * 4];
        Self { width, height, pixels }
    }

    #[inline]
    pub fn put(&mut self, x: u32, y: u32, rgba: (u8, u8, u8, u8)) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i] = rgba.0;
        self.pixels[i + 1] = rgba.1;
        self.pixels[i + 2] = rgba.2;
        self.pixels[i + 3] = rgba.3;
    }

    /// Encode the region as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let img: image::ImageBuffer<image::Rgba<u8>, _> =
            image::ImageBuffer::from_raw(self.width, self.height, self.pixels.clone())
                .ok_or_else(|| Error::Encode("pixel buffer does not match region dimensions".into()))?;
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .map_err(|e| Error::Encode(format!("PNG encoding failed: {}", e)))?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_region_is_white() {
        let r = PixelRegion::blank(4, 2);
        assert_eq!(r.pixels.len(), 4 * 2 * 4);
        assert!(r.pixels.iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn to_png_emits_png_signature() {
        let r = PixelRegion::blank(8, 8);
        let png = r.to_png().expect("encode");
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
