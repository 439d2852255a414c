//! Vigovia Itinerary Exporter
//!
//! Renders the static Vigovia travel-itinerary document and exports it as a
//! multi-page A4 PDF. The itinerary is expressed as a plain data record, a
//! template turns it into markup, a small layout/paint/raster pipeline
//! captures the markup as a pixel buffer, and the exporter slices that buffer
//! across fixed-size pages.
//!
//! # Example
//!
//! ```no_run
//! use vigovia_pdf::{DocumentExporter, ExportConfig};
//! use vigovia_pdf::capture::RegionCapture;
//! use vigovia_pdf::{itinerary, template};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = template::render_html(&itinerary::Itinerary::sample());
//! let exporter = DocumentExporter::new(RegionCapture, ExportConfig::default());
//! let report = exporter.export_to_file(&html, "Vigovia_Itinerary.pdf")?;
//! println!("wrote {} page(s)", report.pages);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Static itinerary content and the template that turns it into markup
pub mod itinerary;
pub mod template;

// Rendering pipeline backing the capture capability
pub mod rendering;

// Capture seam (opaque "rasterize a region" capability)
pub mod capture;

// The exporter core: pagination math and PDF assembly
pub mod export;

// Async-friendly exporter API (worker-backed abstraction)
pub mod async_api;

// Re-export the main types at the crate root for ergonomic use
pub use async_api::Exporter;
pub use export::{DocumentExporter, ExportReport, ExportStatus, PageGeometry, A4_PORTRAIT, DEFAULT_OUTPUT_NAME};

/// Configuration for an export run
///
/// The defaults reproduce the original capture setup: an 800px-wide region
/// rasterized at 2x for quality, paginated onto portrait A4 pages.
///
/// # Examples
///
/// ```
/// let cfg = vigovia_pdf::ExportConfig::default();
/// assert_eq!(cfg.viewport.width, 800);
/// assert_eq!(cfg.scale, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Viewport the document is laid out against; the width fixes the line
    /// wrapping, the height is only a lower bound on the captured region
    pub viewport: Viewport,
    /// Integer raster supersampling factor
    pub scale: u32,
    /// Physical geometry of one output page
    pub geometry: PageGeometry,
    /// Document title embedded in the PDF metadata
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            scale: 2,
            geometry: A4_PORTRAIT,
            title: "Vigovia Itinerary".to_string(),
        }
    }
}

/// Viewport dimensions in logical pixels
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
