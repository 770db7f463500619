//! End-to-end report generation: load, fetch, lay out, serialise

use log::{debug, info, warn};
use printpdf::PdfDocument;

use crate::config::Settings;
use crate::error::{FetchError, ReportError};
use crate::fetch::{fetch_all, ImageSource};
use crate::model::{CheckItemLabelTable, CheckItemLabels, HandoverAggregate};
use crate::render::layouts::{AssembledReport, HandoverReportRenderer, PhotoPlan};
use crate::store::HandoverStore;

/// A finished report
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub bytes: Vec<u8>,
    /// Suggested download name, `<registration>-handover.pdf`
    pub filename: String,
    pub page_count: usize,
}

/// Suggested filename for a vehicle's report
pub fn report_filename(registration: &str) -> String {
    let stem: String = registration
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "handover" } else { &stem };
    format!("{}-handover.pdf", stem)
}

/// Generates handover reports from a store and an image source
pub struct ReportBuilder<'a> {
    store: &'a dyn HandoverStore,
    images: &'a dyn ImageSource,
    settings: Settings,
    labels: Box<dyn CheckItemLabels + 'a>,
}

impl<'a> ReportBuilder<'a> {
    /// Check-item labels come from the built-in table plus any overrides in
    /// `settings`
    pub fn new(
        store: &'a dyn HandoverStore,
        images: &'a dyn ImageSource,
        settings: Settings,
    ) -> Self {
        let labels = CheckItemLabelTable::with_overrides(settings.check_labels.clone());
        Self {
            store,
            images,
            settings,
            labels: Box::new(labels),
        }
    }

    pub fn with_labels(mut self, labels: impl CheckItemLabels + 'a) -> Self {
        self.labels = Box::new(labels);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn load(&self, id: &str) -> Result<HandoverAggregate, ReportError> {
        self.store
            .load_aggregate(id)?
            .ok_or_else(|| ReportError::NotFound(id.to_string()))
    }

    /// Download every photo the layout will draw. Entry `i` belongs to
    /// `aggregate.photos[i]`.
    fn fetch_photos(
        &self,
        aggregate: &HandoverAggregate,
    ) -> Vec<Option<Result<Vec<u8>, FetchError>>> {
        let plan = PhotoPlan::new(&aggregate.photos);
        let indices = plan.displayed();
        let urls: Vec<String> = indices
            .iter()
            .map(|&i| aggregate.photos[i].remote_url.clone())
            .collect();

        let mut fetched: Vec<Option<Result<Vec<u8>, FetchError>>> =
            (0..aggregate.photos.len()).map(|_| None).collect();
        let results = fetch_all(self.images, &urls, self.settings.fetch_concurrency);
        let failures = results.iter().filter(|r| r.is_err()).count();
        if failures > 0 {
            warn!("{} of {} photos could not be fetched", failures, urls.len());
        }
        for (index, result) in indices.into_iter().zip(results) {
            fetched[index] = Some(result);
        }
        fetched
    }

    fn assemble(&self, aggregate: &HandoverAggregate) -> (PdfDocument, AssembledReport) {
        let fetched = self.fetch_photos(aggregate);
        let title = format!("Vehicle Handover Report - {}", aggregate.vehicle.registration);
        let mut doc = PdfDocument::new(&title);
        let renderer = HandoverReportRenderer::new(&self.settings, self.labels.as_ref());
        let report = renderer.assemble(&mut doc, aggregate, &fetched);
        (doc, report)
    }

    /// Lay out a handover without serialising it
    pub fn layout(&self, id: &str) -> Result<AssembledReport, ReportError> {
        let aggregate = self.load(id)?;
        let (_, report) = self.assemble(&aggregate);
        Ok(report)
    }

    /// Render the handover `id` to PDF
    pub fn generate_report(&self, id: &str) -> Result<GeneratedReport, ReportError> {
        info!("Generating handover report {}", id);
        let aggregate = self.load(id)?;
        debug!(
            "Loaded {}: {} checks, {} tyres, {} photos",
            id,
            aggregate.checks.len(),
            aggregate.tyres.len(),
            aggregate.photos.len()
        );

        let (doc, report) = self.assemble(&aggregate);
        let page_count = report.page_count();
        let renderer = HandoverReportRenderer::new(&self.settings, self.labels.as_ref());
        let bytes = renderer.into_pdf_bytes(doc, report.pages)?;

        let filename = report_filename(&aggregate.vehicle.registration);
        info!(
            "Rendered {} ({} pages, {} bytes)",
            filename,
            page_count,
            bytes.len()
        );
        Ok(GeneratedReport {
            bytes,
            filename,
            page_count,
        })
    }
}
