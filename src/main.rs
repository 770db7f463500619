use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use handover_pdf::cli::Args;
use handover_pdf::config::Settings;
use handover_pdf::fetch::HttpImageSource;
use handover_pdf::report::ReportBuilder;
use handover_pdf::store::JsonFileStore;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let mut settings = Settings::default();
    if let Some(ref path) = args.config {
        settings = settings
            .with_file(path)
            .with_context(|| format!("Failed to load settings: {}", path.display()))?;
    }
    let settings = settings
        .with_args(&args)
        .with_context(|| "Invalid command line settings")?;

    let store = JsonFileStore::new(&args.store);
    let images = HttpImageSource::from_settings(&settings);
    let report = ReportBuilder::new(&store, &images, settings)
        .generate_report(&args.handover_id)
        .with_context(|| "Failed to generate report")?;

    let output_path = args.output_path(&report.filename);
    fs::write(&output_path, &report.bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    log::info!(
        "Wrote {} pages to {}",
        report.page_count,
        output_path.display()
    );

    Ok(())
}
