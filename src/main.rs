use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use vigovia_pdf::capture::RegionCapture;
use vigovia_pdf::{itinerary::Itinerary, template, DocumentExporter, ExportConfig, Viewport, DEFAULT_OUTPUT_NAME};

/// Render the Vigovia itinerary and export it as a paginated A4 PDF.
#[derive(Parser, Debug)]
#[command(name = "vigovia-pdf", version, about)]
struct Args {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
    out: PathBuf,

    /// Viewport width the document is laid out against, in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Raster supersampling factor
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Print the itinerary record as JSON instead of exporting
    #[arg(long)]
    dump_json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let itinerary = Itinerary::sample();

    if args.dump_json {
        println!("{}", serde_json::to_string_pretty(&itinerary)?);
        return Ok(());
    }

    let config = ExportConfig {
        viewport: Viewport {
            width: args.width,
            ..Viewport::default()
        },
        scale: args.scale,
        ..ExportConfig::default()
    };

    let html = template::render_html(&itinerary);
    let exporter = DocumentExporter::new(RegionCapture, config);
    let report = exporter
        .export_to_file(&html, &args.out)
        .with_context(|| format!("failed to export {}", args.out.display()))?;

    println!(
        "wrote {} ({} page(s), {}x{}px captured)",
        args.out.display(),
        report.pages,
        report.image_width_px,
        report.image_height_px
    );
    Ok(())
}
