use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use vigovia_pdf::capture::{Capture, CaptureOptions, RegionCapture};
use vigovia_pdf::{itinerary::Itinerary, template, Viewport};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_region_digest_matches_fixture() {
    let html = template::render_html(&Itinerary::sample());
    let opts = CaptureOptions {
        viewport: Viewport { width: 800, height: 600 },
        scale: 2,
    };
    let region = RegionCapture.capture(&html, &opts).expect("capture");

    // Content-addressed digest keeps the golden file small
    let mut hasher = Sha256::new();
    hasher.update(region.width.to_le_bytes());
    hasher.update(region.height.to_le_bytes());
    hasher.update(&region.pixels);
    let digest = hex::encode(hasher.finalize());

    let expected_path = golden_path("itinerary_region.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
