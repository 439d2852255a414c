//! The capture seam: an opaque "rasterize a rendered region" capability.
//!
//! The exporter only depends on the [`Capture`] trait, mirroring how the
//! original treated its imaging library as an external capability that may be
//! missing at call time. The default [`RegionCapture`] implementation drives
//! the in-crate layout/paint/raster pipeline.

use crate::error::{Error, Result};
use crate::rendering::{layout, paint, raster, PixelRegion};
use crate::Viewport;
use scraper::Html;

/// Options controlling a single capture
#[derive(Debug, Clone, Copy)]
pub struct CaptureOptions {
    pub viewport: Viewport,
    /// Integer supersampling factor applied to the output buffer
    pub scale: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            scale: 2,
        }
    }
}

/// Core trait for capture backends
pub trait Capture {
    /// Whether the capability can be used at all right now.
    /// Checked by the exporter before any capture is attempted.
    fn is_available(&self) -> bool {
        true
    }

    /// Rasterize the document into a pixel buffer.
    fn capture(&self, html: &str, options: &CaptureOptions) -> Result<PixelRegion>;
}

/// Default capture backend: layout, paint and rasterize in-process.
pub struct RegionCapture;

impl Capture for RegionCapture {
    fn capture(&self, html: &str, options: &CaptureOptions) -> Result<PixelRegion> {
        if options.viewport.width == 0 {
            return Err(Error::Config("viewport width must be non-zero".into()));
        }
        if options.scale == 0 {
            return Err(Error::Config("capture scale must be non-zero".into()));
        }

        let document = Html::parse_document(html);
        let result = layout::layout_document(&document, options.viewport);
        if result.nodes.is_empty() {
            return Err(Error::Capture("document produced no layout content".into()));
        }

        let commands = paint::build_display_list(&result.nodes);
        // The region covers the whole document, never less than one viewport
        let height = result.height.max(options.viewport.height);
        let region = raster::rasterize(&commands, options.viewport.width, height, options.scale);

        log::debug!(
            "captured region {}x{} ({} blocks, scale {})",
            region.width,
            region.height,
            result.nodes.len(),
            options.scale
        );
        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_produces_a_full_size_region() {
        let html = "<html><body><h1>Title</h1><p>Some text</p></body></html>";
        let opts = CaptureOptions {
            viewport: Viewport { width: 400, height: 300 },
            scale: 2,
        };
        let region = RegionCapture.capture(html, &opts).expect("capture");
        assert_eq!(region.width, 800);
        assert!(region.height >= 600);
        assert_eq!(region.pixels.len(), (region.width * region.height * 4) as usize);
    }

    #[test]
    fn capture_rejects_empty_documents() {
        let err = RegionCapture
            .capture("<html><body></body></html>", &CaptureOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Capture(_)));
    }

    #[test]
    fn capture_rejects_zero_scale() {
        let opts = CaptureOptions {
            viewport: Viewport::default(),
            scale: 0,
        };
        let err = RegionCapture.capture("<html><body><p>x</p></body></html>", &opts).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
