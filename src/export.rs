//! The document exporter: pagination math and PDF assembly.
//!
//! Given a captured [`PixelRegion`], the exporter scales it to the fixed page
//! width, computes how many fixed-height pages it spans, and places the same
//! full image at a shifted vertical offset on every page so each page's
//! window shows the next slice. The assembled document is serialized with
//! `printpdf` and persisted only on success.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use printpdf::image::RawImage;
use printpdf::ops::Op;
use printpdf::xobject::{XObject, XObjectTransform};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt, XObjectId};

use crate::capture::{Capture, CaptureOptions};
use crate::error::{Error, Result};
use crate::rendering::PixelRegion;
use crate::ExportConfig;

/// Default name of the produced artifact
pub const DEFAULT_OUTPUT_NAME: &str = "Vigovia_Itinerary.pdf";

/// Fixed physical dimensions of one output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
}

/// A4 portrait, the only geometry the original ever used
pub const A4_PORTRAIT: PageGeometry = PageGeometry {
    width_mm: 210.0,
    height_mm: 297.0,
};

/// Placement of the source image on one page: the offset of the image's top
/// edge relative to the page's top edge, in mm. Page 1 is 0; later pages are
/// negative (the image is shifted upward by one page height per page).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    pub image_top_mm: f32,
}

/// Height of the captured region once scaled to the fixed page width,
/// preserving the source aspect ratio.
pub fn scaled_image_height_mm(region_width_px: u32, region_height_px: u32, geometry: &PageGeometry) -> f32 {
    region_height_px as f32 * geometry.width_mm / region_width_px as f32
}

/// Compute one placement per output page.
///
/// The loop terminates because `remaining` strictly decreases by one page
/// height per iteration. An image exactly `k` pages tall yields `k` pages;
/// the boundary case at `remaining == 0` does not append a trailing page
/// with no content left to show.
pub fn plan_pages(image_height_mm: f32, geometry: &PageGeometry) -> Vec<PagePlacement> {
    debug_assert!(geometry.height_mm > 0.0);
    let mut placements = vec![PagePlacement { image_top_mm: 0.0 }];
    let mut remaining = image_height_mm - geometry.height_mm;
    while remaining > 0.0 {
        placements.push(PagePlacement {
            image_top_mm: remaining - image_height_mm,
        });
        remaining -= geometry.height_mm;
    }
    placements
}

/// Summary of a successful export
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub pages: usize,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub image_height_mm: f32,
}

/// Read-only view of the exporter's in-progress flag
#[derive(Debug, Clone)]
pub struct ExportStatus(Arc<AtomicBool>);

impl ExportStatus {
    pub fn is_exporting(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

// Clears the in-progress flag on every exit path, success or failure.
struct InProgressGuard(Arc<AtomicBool>);

impl Drop for InProgressGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Converts a captured region into a paginated PDF document.
pub struct DocumentExporter<C: Capture> {
    capture: C,
    config: ExportConfig,
    in_progress: Arc<AtomicBool>,
}

impl<C: Capture> DocumentExporter<C> {
    pub fn new(capture: C, config: ExportConfig) -> Self {
        Self {
            capture,
            config,
            in_progress: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle for observing whether an export is currently running.
    pub fn status(&self) -> ExportStatus {
        ExportStatus(self.in_progress.clone())
    }

    fn capture_options(&self) -> CaptureOptions {
        CaptureOptions {
            viewport: self.config.viewport,
            scale: self.config.scale,
        }
    }

    // Single writer for the flag: set here, cleared by the guard's Drop.
    fn begin(&self) -> Result<InProgressGuard> {
        match self
            .in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => Ok(InProgressGuard(self.in_progress.clone())),
            Err(_) => Err(Error::ExportInProgress),
        }
    }

    /// Export the rendered document into `writer`.
    ///
    /// Fails fast with [`Error::DependencyUnavailable`] when the capture
    /// capability is missing, before any capture or page construction.
    pub fn export_to_writer<W: std::io::Write>(&self, html: &str, writer: &mut W) -> Result<ExportReport> {
        let _guard = self.begin()?;

        if !self.capture.is_available() {
            return Err(Error::DependencyUnavailable(
                "capture backend reports unavailable".into(),
            ));
        }

        let region = self.capture.capture(html, &self.capture_options())?;
        if region.width == 0 || region.height == 0 || region.pixels.is_empty() {
            return Err(Error::Capture("capture produced no usable buffer".into()));
        }

        let report = self.paginate_into(&region, writer)?;
        log::info!(
            "exported {} page(s) from a {}x{} region ({:.1}mm scaled height)",
            report.pages,
            report.image_width_px,
            report.image_height_px,
            report.image_height_mm
        );
        Ok(report)
    }

    /// Export and persist to `path`.
    ///
    /// The document is serialized to memory first so a failure never leaves a
    /// partial file behind.
    pub fn export_to_file<P: AsRef<Path>>(&self, html: &str, path: P) -> Result<ExportReport> {
        let mut buf = Vec::new();
        let report = self.export_to_writer(html, &mut buf)?;
        std::fs::write(path.as_ref(), &buf)?;
        Ok(report)
    }

    fn paginate_into<W: std::io::Write>(&self, region: &PixelRegion, writer: &mut W) -> Result<ExportReport> {
        let geometry = self.config.geometry;
        let png = region.to_png()?;

        let mut warnings = Vec::new();
        let raw_image = RawImage::decode_from_bytes(&png, &mut warnings)
            .map_err(|e| Error::Encode(format!("failed to decode captured image: {}", e)))?;
        let (img_w_px, img_h_px) = (raw_image.width as f32, raw_image.height as f32);

        let mut doc = PdfDocument::new(&self.config.title);
        let xobj_id = XObjectId::new();
        doc.resources
            .xobjects
            .map
            .insert(xobj_id.clone(), XObject::Image(raw_image));

        let image_height_mm = scaled_image_height_mm(region.width, region.height, &geometry);
        let placements = plan_pages(image_height_mm, &geometry);

        let page_h_pt = Mm(geometry.height_mm).into_pt().0;
        let image_w_pt = Mm(geometry.width_mm).into_pt().0;
        let image_h_pt = Mm(image_height_mm).into_pt().0;

        for placement in &placements {
            // printpdf's origin is the bottom-left corner; image_top_mm is
            // measured from the page's top edge.
            let y_pt = page_h_pt - Mm(placement.image_top_mm + image_height_mm).into_pt().0;
            let transform = XObjectTransform {
                translate_x: Some(Pt(0.0)),
                translate_y: Some(Pt(y_pt)),
                scale_x: Some(image_w_pt / img_w_px),
                scale_y: Some(image_h_pt / img_h_px),
                rotate: None,
                dpi: Some(72.0),
            };
            let ops = vec![Op::UseXobject {
                id: xobj_id.clone(),
                transform,
            }];
            doc.pages.push(PdfPage::new(
                Mm(geometry.width_mm),
                Mm(geometry.height_mm),
                ops,
            ));
        }

        let mut save_warnings = Vec::new();
        doc.save_writer(writer, &PdfSaveOptions::default(), &mut save_warnings);

        Ok(ExportReport {
            pages: placements.len(),
            image_width_px: region.width,
            image_height_px: region.height,
            image_height_mm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_height_preserves_aspect_ratio() {
        // 800x2000px against a 210mm page width -> 525mm
        let h = scaled_image_height_mm(800, 2000, &A4_PORTRAIT);
        assert!((h - 525.0).abs() < 1e-3);
    }

    #[test]
    fn single_page_when_image_fits() {
        let placements = plan_pages(200.0, &A4_PORTRAIT);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].image_top_mm, 0.0);
    }

    #[test]
    fn two_pages_for_the_reference_scenario() {
        // 525mm of content on 297mm pages -> ceil(525/297) = 2
        let placements = plan_pages(525.0, &A4_PORTRAIT);
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].image_top_mm, 0.0);
        assert!((placements[1].image_top_mm + 297.0).abs() < 1e-3);
    }

    #[test]
    fn exact_multiple_does_not_append_a_trailing_page() {
        let placements = plan_pages(297.0, &A4_PORTRAIT);
        assert_eq!(placements.len(), 1);
        let placements = plan_pages(594.0, &A4_PORTRAIT);
        assert_eq!(placements.len(), 2);
    }

    #[test]
    fn page_count_is_ceil_of_height_over_page_height() {
        for k in 0u32..6 {
            for r in [1.0f32, 50.0, 296.0, 297.0] {
                let h = k as f32 * 297.0 + r;
                let expected = (h / 297.0).ceil() as usize;
                let got = plan_pages(h, &A4_PORTRAIT).len();
                assert_eq!(got, expected.max(1), "height {}", h);
            }
        }
    }

    #[test]
    fn placements_shift_upward_by_one_page_height() {
        let placements = plan_pages(1000.0, &A4_PORTRAIT);
        assert_eq!(placements.len(), 4);
        for (i, pair) in placements.windows(2).enumerate() {
            let delta = pair[0].image_top_mm - pair[1].image_top_mm;
            assert!((delta - 297.0).abs() < 1e-3, "step {} shifted by {}", i, delta);
        }
    }
}
