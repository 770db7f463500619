//! Handover Report Layout Renderer
//!
//! Lays out one handover as A4 pages: branded header and title, the vehicle
//! details box, checklist and tyre tables, optional comments, then the photo
//! pages. Footers are stamped in a final pass once the page count is known.

use log::{debug, warn};
use printpdf::{Mm, PdfDocument, PdfPage, PdfSaveOptions};

use crate::config::Settings;
use crate::error::{FetchError, RenderError};
use crate::fetch::decode_image;
use crate::model::{
    group_by_category, CheckItemLabels, HandoverAggregate, PhotoCategory, PhotoEntry, PhotoGroup,
};
use crate::render::components::{
    checklist_rows, checklist_table, tyre_rows, tyre_table, Branding, CommentsRenderer,
    DetailsBoxRenderer, FooterRenderer, HeaderRenderer, LoadedImage, PhotoGridRenderer,
    PhotoSlot, RowPlacement, SectionRenderer,
};
use crate::render::helpers::colors::BLACK;
use crate::render::helpers::compress::compress_or_keep;
use crate::render::helpers::cursor::PageCursor;
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::LayerBuilder;

pub const CHECKS_TITLE: &str = "Vehicle Checks";
pub const TYRES_TITLE: &str = "Tyre Information";
pub const COMMENTS_TITLE: &str = "Other Comments";
pub const PHOTOS_TITLE: &str = "Photos";
pub const V5_HEADING: &str = "V5 Document";
pub const SIGNATURE_HEADING: &str = "Customer Signature";

/// Height of the signature box
const SIGNATURE_BOX_HEIGHT: f32 = 110.0;

/// Date format used throughout the report (en-GB)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Which photos are drawn, and where
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoPlan {
    /// Generic grid groups in first-seen order
    pub groups: Vec<PhotoGroup>,
    pub v5: Option<PhotoGroup>,
    /// The first signature photo
    pub signature: Option<usize>,
    /// Signature photos after the first; not drawn
    pub ignored: Vec<usize>,
}

impl PhotoPlan {
    pub fn new(photos: &[PhotoEntry]) -> Self {
        let groups = group_by_category(photos, |c| c.in_generic_grid());
        let v5 = group_by_category(photos, |c| c == PhotoCategory::V5)
            .into_iter()
            .next();
        let mut signatures = photos
            .iter()
            .enumerate()
            .filter(|(_, p)| p.category == PhotoCategory::Signature)
            .map(|(i, _)| i);
        let signature = signatures.next();
        let ignored = signatures.collect();

        Self {
            groups,
            v5,
            signature,
            ignored,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.v5.is_none() && self.signature.is_none()
    }

    /// Indices of every drawn photo, in layout order
    pub fn displayed(&self) -> Vec<usize> {
        self.groups
            .iter()
            .chain(self.v5.iter())
            .flat_map(|g| g.indices.iter().copied())
            .chain(self.signature)
            .collect()
    }
}

/// The laid-out report, before serialisation
pub struct AssembledReport {
    pub pages: Vec<LayerBuilder>,
    pub checklist_rows: Vec<RowPlacement>,
    pub tyre_rows: Vec<RowPlacement>,
    /// One slot per drawn photo, in layout order
    pub photo_slots: Vec<PhotoSlot>,
}

impl AssembledReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Strings drawn on a page, in drawing order
    pub fn page_texts(&self, page: usize) -> &[String] {
        self.pages.get(page).map(|p| p.texts()).unwrap_or(&[])
    }
}

/// Handover report renderer
pub struct HandoverReportRenderer<'a> {
    settings: &'a Settings,
    labels: &'a dyn CheckItemLabels,
    fonts: BuiltinFontSet,
}

impl<'a> HandoverReportRenderer<'a> {
    pub fn new(settings: &'a Settings, labels: &'a dyn CheckItemLabels) -> Self {
        Self {
            settings,
            labels,
            fonts: BuiltinFontSet::for_family(settings.font_family),
        }
    }

    fn branding(&self) -> Branding {
        Branding {
            name: self.settings.company_name.clone(),
            address: self.settings.company_address.clone(),
            phone: self.settings.company_phone.clone(),
        }
    }

    /// Lay out every page. `fetched[i]` holds the download result for
    /// `aggregate.photos[i]`, or `None` when it wasn't fetched. Decoded photos
    /// are registered with `doc`.
    pub fn assemble(
        &self,
        doc: &mut PdfDocument,
        aggregate: &HandoverAggregate,
        fetched: &[Option<Result<Vec<u8>, FetchError>>],
    ) -> AssembledReport {
        let settings = self.settings;
        let handover = &aggregate.handover;
        let vehicle = &aggregate.vehicle;
        let branding = self.branding();
        let header = HeaderRenderer::new(self.fonts, &branding);
        let section = SectionRenderer::new(self.fonts);
        let content_width = settings.content_width();

        let mut cursor = PageCursor::new(settings.geometry());

        header.render_full(&mut cursor);
        header.render_title(&mut cursor, handover.kind, handover.status);

        let fields = [
            ("Date", handover.date.format(DATE_FORMAT).to_string()),
            ("Inspector", handover.inspector_name.clone()),
            ("Mileage", handover.mileage_display().unwrap_or_default()),
            ("Vehicle", vehicle.make_model()),
            ("Registration", vehicle.registration.clone()),
            ("Status", handover.status.label().to_string()),
        ];
        DetailsBoxRenderer::new(self.fonts).render(&mut cursor, &fields);

        section.render(&mut cursor, CHECKS_TITLE);
        let checklist_rows = checklist_table(self.fonts, content_width)
            .repeat_header(settings.repeat_table_header)
            .render(&mut cursor, &checklist_rows(&aggregate.checks, self.labels));
        debug!(
            "Checklist: {} rows, ends on page {}",
            checklist_rows.len(),
            cursor.page_index() + 1
        );

        section.render(&mut cursor, TYRES_TITLE);
        let tyre_rows = tyre_table(self.fonts, content_width)
            .repeat_header(settings.repeat_table_header)
            .render(&mut cursor, &tyre_rows(&aggregate.tyres));

        if let Some(comments) = handover.comments() {
            section.render(&mut cursor, COMMENTS_TITLE);
            CommentsRenderer::new(self.fonts).render(&mut cursor, comments);
        }

        let plan = PhotoPlan::new(&aggregate.photos);
        let mut photo_slots = Vec::new();
        if !plan.is_empty() {
            for &index in &plan.ignored {
                warn!(
                    "Ignoring extra signature photo {}",
                    aggregate.photos[index].remote_url
                );
            }
            let images = self.load_images(doc, &aggregate.photos, fetched, &plan);
            photo_slots =
                self.render_photos(&mut cursor, &header, &aggregate.photos, &images, &plan);
        }

        let generated = settings.generation_date().format(DATE_FORMAT).to_string();
        let vehicle_label = vehicle.label();
        FooterRenderer::new(self.fonts, settings.geometry(), &vehicle_label, &generated)
            .render_all(cursor.pages_mut());

        debug!("Report laid out on {} pages", cursor.page_count());
        AssembledReport {
            pages: cursor.into_pages(),
            checklist_rows,
            tyre_rows,
            photo_slots,
        }
    }

    /// Decode and embed every drawn photo. Entries for undrawn photos stay
    /// `None`.
    fn load_images(
        &self,
        doc: &mut PdfDocument,
        photos: &[PhotoEntry],
        fetched: &[Option<Result<Vec<u8>, FetchError>>],
        plan: &PhotoPlan,
    ) -> Vec<Option<LoadedImage>> {
        let mut images: Vec<Option<LoadedImage>> = vec![None; photos.len()];
        for index in plan.displayed() {
            let url = &photos[index].remote_url;
            let image = match fetched.get(index).and_then(Option::as_ref) {
                Some(Ok(bytes)) => match decode_image(bytes) {
                    Ok(decoded) => {
                        let (width, height) = (decoded.width, decoded.height);
                        let id = doc.add_image(&decoded.into_raw_image());
                        LoadedImage::Embedded { id, width, height }
                    }
                    Err(e) => {
                        warn!("Photo {} could not be embedded: {}", url, e);
                        LoadedImage::DecodeFailed
                    }
                },
                Some(Err(_)) | None => LoadedImage::FetchFailed,
            };
            images[index] = Some(image);
        }
        images
    }

    fn render_photos(
        &self,
        cursor: &mut PageCursor,
        header: &HeaderRenderer,
        photos: &[PhotoEntry],
        images: &[Option<LoadedImage>],
        plan: &PhotoPlan,
    ) -> Vec<PhotoSlot> {
        let grid = PhotoGridRenderer::new(self.fonts);

        cursor.new_page();
        header.render_compact(cursor);
        let left = cursor.geometry().left;
        let top = cursor.y();
        let layer = cursor.layer();
        layer.set_fill_color(BLACK);
        layer.use_text(PHOTOS_TITLE, 13.0, left, top, self.fonts.bold);
        cursor.advance(20.0);

        let mut slots = Vec::new();
        for group in &plan.groups {
            let entries = group_entries(group, photos, images);
            slots.extend(grid.render_group(cursor, group.category.label(), &entries));
        }
        if let Some(v5) = &plan.v5 {
            let entries = group_entries(v5, photos, images);
            slots.extend(grid.render_group(cursor, V5_HEADING, &entries));
        }
        if let Some(index) = plan.signature {
            if let Some(image) = &images[index] {
                slots.push(grid.render_single(
                    cursor,
                    SIGNATURE_HEADING,
                    &photos[index],
                    image,
                    SIGNATURE_BOX_HEIGHT,
                ));
            }
        }
        slots
    }

    /// Serialise assembled pages, compressing streams when enabled
    pub fn into_pdf_bytes(
        &self,
        mut doc: PdfDocument,
        pages: Vec<LayerBuilder>,
    ) -> Result<Vec<u8>, RenderError> {
        let width = Mm(self.settings.page_width * PT_TO_MM);
        let height = Mm(self.settings.page_height * PT_TO_MM);
        let pages = pages
            .into_iter()
            .map(|layer| PdfPage::new(width, height, layer.into_ops()))
            .collect();
        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            debug!("printpdf reported {} warnings", warnings.len());
        }
        if bytes.is_empty() {
            return Err(RenderError::PdfGeneration(
                "PDF writer produced no output".to_string(),
            ));
        }

        if self.settings.compress {
            Ok(compress_or_keep(bytes))
        } else {
            Ok(bytes)
        }
    }
}

/// Pair each photo of a group with its loaded image
fn group_entries<'p>(
    group: &PhotoGroup,
    photos: &'p [PhotoEntry],
    images: &'p [Option<LoadedImage>],
) -> Vec<(&'p PhotoEntry, &'p LoadedImage)> {
    group
        .indices
        .iter()
        .filter_map(|&i| images[i].as_ref().map(|image| (&photos[i], image)))
        .collect()
}
