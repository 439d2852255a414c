use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use vigovia_pdf::capture::{Capture, CaptureOptions, RegionCapture};
use vigovia_pdf::rendering::PixelRegion;
use vigovia_pdf::{itinerary::Itinerary, template, DocumentExporter, Error, ExportConfig};

struct UnavailableCapture {
    capture_called: Arc<AtomicBool>,
}

impl Capture for UnavailableCapture {
    fn is_available(&self) -> bool {
        false
    }

    fn capture(&self, _html: &str, _options: &CaptureOptions) -> vigovia_pdf::Result<PixelRegion> {
        self.capture_called.store(true, Ordering::SeqCst);
        Ok(PixelRegion::blank(10, 10))
    }
}

struct FailingCapture;

impl Capture for FailingCapture {
    fn capture(&self, _html: &str, _options: &CaptureOptions) -> vigovia_pdf::Result<PixelRegion> {
        Err(Error::Capture("target not mounted".into()))
    }
}

// Blocks inside capture until the test releases it, so concurrency around the
// in-progress flag can be observed.
struct BlockingCapture {
    release: Mutex<std::sync::mpsc::Receiver<()>>,
}

impl Capture for BlockingCapture {
    fn capture(&self, _html: &str, _options: &CaptureOptions) -> vigovia_pdf::Result<PixelRegion> {
        let _ = self.release.lock().unwrap().recv();
        Ok(PixelRegion::blank(100, 100))
    }
}

#[test]
fn full_export_produces_a_multi_page_pdf() {
    let html = template::render_html(&Itinerary::sample());
    let exporter = DocumentExporter::new(RegionCapture, ExportConfig::default());

    let mut buf = Vec::new();
    let report = exporter.export_to_writer(&html, &mut buf).expect("export");

    assert_eq!(&buf[0..4], b"%PDF");
    let expected_pages = (report.image_height_mm / 297.0).ceil() as usize;
    assert_eq!(report.pages, expected_pages.max(1));
    assert!(report.pages >= 2, "the full itinerary should span several pages");
    assert!(!exporter.status().is_exporting());
}

#[test]
fn unavailable_dependency_fails_fast_without_capturing() {
    let capture_called = Arc::new(AtomicBool::new(false));
    let exporter = DocumentExporter::new(
        UnavailableCapture {
            capture_called: capture_called.clone(),
        },
        ExportConfig::default(),
    );

    let mut buf = Vec::new();
    let err = exporter.export_to_writer("<html><body><p>x</p></body></html>", &mut buf).unwrap_err();

    assert!(matches!(err, Error::DependencyUnavailable(_)));
    assert!(!capture_called.load(Ordering::SeqCst), "capture must not be attempted");
    assert!(buf.is_empty(), "no document may be produced");
    assert!(!exporter.status().is_exporting());
}

#[test]
fn capture_failure_clears_the_in_progress_flag() {
    let exporter = DocumentExporter::new(FailingCapture, ExportConfig::default());
    let status = exporter.status();
    assert!(!status.is_exporting());

    let mut buf = Vec::new();
    let err = exporter.export_to_writer("<html><body><p>x</p></body></html>", &mut buf).unwrap_err();

    assert!(matches!(err, Error::Capture(_)));
    assert!(buf.is_empty());
    assert!(!status.is_exporting());
}

#[test]
fn export_to_file_writes_nothing_on_failure() {
    let path = std::env::temp_dir().join("vigovia_failed_export.pdf");
    let _ = std::fs::remove_file(&path);

    let exporter = DocumentExporter::new(FailingCapture, ExportConfig::default());
    let err = exporter.export_to_file("<html><body><p>x</p></body></html>", &path).unwrap_err();

    assert!(matches!(err, Error::Capture(_)));
    assert!(!path.exists(), "no partial document may be persisted");
}

#[test]
fn second_trigger_is_rejected_while_an_export_runs() {
    let (release_tx, release_rx) = std::sync::mpsc::channel();
    let exporter = Arc::new(DocumentExporter::new(
        BlockingCapture {
            release: Mutex::new(release_rx),
        },
        ExportConfig::default(),
    ));
    let status = exporter.status();

    let first = {
        let exporter = exporter.clone();
        std::thread::spawn(move || {
            let mut buf = Vec::new();
            exporter.export_to_writer("<html><body><p>x</p></body></html>", &mut buf)
        })
    };

    // Wait for the first export to take the flag
    while !status.is_exporting() {
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    let mut buf = Vec::new();
    let err = exporter.export_to_writer("<html><body><p>x</p></body></html>", &mut buf).unwrap_err();
    assert!(matches!(err, Error::ExportInProgress));

    release_tx.send(()).expect("release first export");
    let first_result = first.join().expect("join");
    assert!(first_result.is_ok(), "the running export must not be disturbed");
    assert!(!status.is_exporting());
}
