pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod render;
pub mod report;
pub mod store;

pub use config::Settings;
pub use error::{ConfigError, FetchError, ImageError, RenderError, ReportError, StoreError};
pub use fetch::{HttpImageSource, ImageSource, MemoryImageSource};
pub use model::{CheckItemLabels, HandoverAggregate};
pub use report::{report_filename, GeneratedReport, ReportBuilder};
pub use store::{HandoverStore, JsonFileStore, MemoryStore};

/// Render one stored handover to PDF, fetching photos over HTTP.
///
/// This is the recommended entry point for library consumers. Use
/// [`ReportBuilder`] directly to supply another image source or label table.
///
/// # Example
///
/// ```no_run
/// use handover_pdf::{generate_report, JsonFileStore, Settings};
///
/// let store = JsonFileStore::new("handovers.json");
/// let report = generate_report(&store, "h-1001", Settings::default()).unwrap();
/// std::fs::write(&report.filename, &report.bytes).unwrap();
/// ```
pub fn generate_report(
    store: &dyn HandoverStore,
    id: &str,
    settings: Settings,
) -> Result<GeneratedReport, ReportError> {
    let images = HttpImageSource::from_settings(&settings);
    let report = ReportBuilder::new(store, &images, settings).generate_report(id);
    report
}
