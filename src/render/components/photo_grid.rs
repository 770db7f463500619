//! Photo grid: category heading then two fixed boxes per row
//!
//! Each slot is a rounded box with the image contain-fitted inside it, or a
//! placeholder when the photo couldn't be fetched or decoded. The caption
//! line is drawn either way.

use printpdf::{PaintMode, XObjectId};

use crate::model::{PhotoCategory, PhotoEntry};
use crate::render::helpers::colors::{BLACK, BORDER, GRAY, LIGHT_BG, LIGHT_GRAY};
use crate::render::helpers::cursor::PageCursor;
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::Align;

pub const FETCH_FAILED_TEXT: &str = "[Photo could not be loaded]";
pub const DECODE_FAILED_TEXT: &str = "[Image unavailable]";

/// A photo ready for layout
#[derive(Debug, Clone)]
pub enum LoadedImage {
    /// Registered with the document; size in pixels
    Embedded {
        id: XObjectId,
        width: u32,
        height: u32,
    },
    FetchFailed,
    DecodeFailed,
}

impl LoadedImage {
    pub fn state(&self) -> SlotState {
        match self {
            LoadedImage::Embedded { .. } => SlotState::Loaded,
            LoadedImage::FetchFailed => SlotState::FetchFailed,
            LoadedImage::DecodeFailed => SlotState::DecodeFailed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Loaded,
    FetchFailed,
    DecodeFailed,
}

/// Where a photo ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotoSlot {
    pub page: usize,
    /// 0 = left, 1 = right
    pub column: usize,
    pub top: f32,
    pub category: PhotoCategory,
    pub state: SlotState,
}

/// Largest rectangle with the image's aspect ratio inside the box, centred.
/// Returns (x offset, y offset, width, height).
pub fn contain_fit(image: (u32, u32), box_width: f32, box_height: f32) -> (f32, f32, f32, f32) {
    let (w, h) = (image.0 as f32, image.1 as f32);
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let scale = (box_width / w).min(box_height / h);
    let (fit_w, fit_h) = (w * scale, h * scale);
    (
        (box_width - fit_w) / 2.0,
        (box_height - fit_h) / 2.0,
        fit_w,
        fit_h,
    )
}

/// Renderer for photo groups and single-photo blocks
pub struct PhotoGridRenderer {
    fonts: BuiltinFontSet,
    box_width: f32,
    box_height: f32,
    column_gap: f32,
    caption_space: f32,
    row_gap: f32,
    /// Gap between the box edge and the image
    inset: f32,
    corner_radius: f32,
    heading_font_size: f32,
    /// Space from the heading top to the first row
    heading_advance: f32,
    caption_font_size: f32,
    placeholder_font_size: f32,
    /// Space after the last row of a group
    group_gap: f32,
}

impl PhotoGridRenderer {
    pub fn new(fonts: BuiltinFontSet) -> Self {
        Self {
            fonts,
            box_width: 245.0,
            box_height: 184.0,
            column_gap: 25.0,
            caption_space: 14.0,
            row_gap: 8.0,
            inset: 2.0,
            corner_radius: 3.0,
            heading_font_size: 10.0,
            heading_advance: 14.0,
            caption_font_size: 7.0,
            placeholder_font_size: 8.0,
            group_gap: 4.0,
        }
    }

    /// Vertical space one grid row takes
    pub fn row_height(&self) -> f32 {
        self.box_height + self.caption_space + self.row_gap
    }

    fn draw_heading(&self, cursor: &mut PageCursor, heading: &str, first_block: f32) {
        // A heading is never left alone at the bottom of a page
        cursor.ensure_space((self.heading_advance + first_block).max(30.0));
        let left = cursor.geometry().left;
        let top = cursor.y();
        let layer = cursor.layer();
        layer.set_fill_color(BLACK);
        layer.use_text(heading, self.heading_font_size, left, top, self.fonts.bold);
        cursor.advance(self.heading_advance);
    }

    /// Draw a heading and its photos two per row. Rows are never split.
    pub fn render_group(
        &self,
        cursor: &mut PageCursor,
        heading: &str,
        photos: &[(&PhotoEntry, &LoadedImage)],
    ) -> Vec<PhotoSlot> {
        if photos.is_empty() {
            return Vec::new();
        }
        self.draw_heading(cursor, heading, self.row_height());

        let mut slots = Vec::with_capacity(photos.len());
        let mut column = 0;
        let mut row_top = cursor.y();

        for (photo, image) in photos {
            if column == 0 {
                cursor.ensure_space(self.row_height());
                row_top = cursor.y();
            }

            let x = cursor.geometry().left + column as f32 * (self.box_width + self.column_gap);
            self.draw_slot(cursor, x, row_top, self.box_height, photo, image);
            slots.push(PhotoSlot {
                page: cursor.page_index(),
                column,
                top: row_top,
                category: photo.category,
                state: image.state(),
            });

            column += 1;
            if column == 2 {
                column = 0;
                cursor.set_y(row_top + self.row_height());
            }
        }

        if column != 0 {
            cursor.set_y(row_top + self.row_height());
        }
        cursor.advance(self.group_gap);
        slots
    }

    /// One photo under its own heading, in a box `box_height` tall
    pub fn render_single(
        &self,
        cursor: &mut PageCursor,
        heading: &str,
        photo: &PhotoEntry,
        image: &LoadedImage,
        box_height: f32,
    ) -> PhotoSlot {
        let block = box_height + self.caption_space + self.row_gap;
        self.draw_heading(cursor, heading, block);

        let top = cursor.y();
        let x = cursor.geometry().left;
        self.draw_slot(cursor, x, top, box_height, photo, image);
        cursor.set_y(top + block + self.group_gap);

        PhotoSlot {
            page: cursor.page_index(),
            column: 0,
            top,
            category: photo.category,
            state: image.state(),
        }
    }

    fn draw_slot(
        &self,
        cursor: &mut PageCursor,
        x: f32,
        top: f32,
        box_height: f32,
        photo: &PhotoEntry,
        image: &LoadedImage,
    ) {
        let layer = cursor.layer();
        let w = self.box_width;

        layer.set_fill_color(LIGHT_BG);
        layer.set_outline_color(BORDER);
        layer.set_outline_thickness(0.5);
        layer.add_rounded_rect(x, top, w, box_height, self.corner_radius, PaintMode::FillStroke);

        let placeholder = match image {
            LoadedImage::Embedded { id, width, height } => {
                let inner_w = w - self.inset * 2.0;
                let inner_h = box_height - self.inset * 2.0;
                let (dx, dy, fit_w, fit_h) = contain_fit((*width, *height), inner_w, inner_h);
                layer.use_image(
                    id.clone(),
                    (*width, *height),
                    x + self.inset + dx,
                    top + self.inset + dy,
                    fit_w,
                    fit_h,
                );
                None
            }
            LoadedImage::FetchFailed => Some(FETCH_FAILED_TEXT),
            LoadedImage::DecodeFailed => Some(DECODE_FAILED_TEXT),
        };

        if let Some(text) = placeholder {
            layer.set_fill_color(LIGHT_GRAY);
            layer.use_text_aligned(
                text,
                self.placeholder_font_size,
                x,
                top + box_height / 2.0 - self.placeholder_font_size / 2.0,
                w,
                Align::Center,
                self.fonts.regular,
            );
        }

        let measurer = self.fonts.measurer(false);
        let caption = measurer.truncate(&photo.caption_line(), self.caption_font_size, w);
        layer.set_fill_color(GRAY);
        layer.use_text(
            caption,
            self.caption_font_size,
            x,
            top + box_height + 3.0,
            self.fonts.regular,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn photo(category: PhotoCategory, caption: Option<&str>) -> PhotoEntry {
        PhotoEntry {
            category,
            remote_url: "https://img.example/p.jpg".to_string(),
            caption: caption.map(str::to_string),
        }
    }

    #[test]
    fn test_contain_fit_wide_image() {
        let (dx, dy, w, h) = contain_fit((400, 100), 200.0, 200.0);
        assert_eq!((w, h), (200.0, 50.0));
        assert_eq!((dx, dy), (0.0, 75.0));
    }

    #[test]
    fn test_contain_fit_tall_image() {
        let (dx, dy, w, h) = contain_fit((100, 400), 241.0, 180.0);
        assert!((h - 180.0).abs() < 0.001);
        assert!((w - 45.0).abs() < 0.001);
        assert!((dx - 98.0).abs() < 0.001);
        assert_eq!(dy, 0.0);
    }

    #[test]
    fn test_contain_fit_degenerate() {
        assert_eq!(contain_fit((0, 10), 100.0, 100.0), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_two_columns_then_new_row() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let grid = PhotoGridRenderer::new(BuiltinFontSet::default());
        let photos: Vec<PhotoEntry> = (0..3)
            .map(|_| photo(PhotoCategory::Exterior, None))
            .collect();
        let images = vec![LoadedImage::FetchFailed; 3];
        let pairs: Vec<_> = photos.iter().zip(images.iter()).collect();

        let slots = grid.render_group(&mut cursor, "Exterior", &pairs);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].column, 0);
        assert_eq!(slots[1].column, 1);
        assert_eq!(slots[0].top, slots[1].top);
        assert_eq!(slots[2].column, 0);
        assert_eq!(slots[2].top, slots[0].top + grid.row_height());
        assert_eq!(cursor.y(), slots[2].top + grid.row_height() + 4.0);
    }

    #[test]
    fn test_row_moves_whole_to_next_page() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let grid = PhotoGridRenderer::new(BuiltinFontSet::default());
        let photos: Vec<PhotoEntry> = (0..8)
            .map(|_| photo(PhotoCategory::Interior, None))
            .collect();
        let images = vec![LoadedImage::DecodeFailed; 8];
        let pairs: Vec<_> = photos.iter().zip(images.iter()).collect();

        let slots = grid.render_group(&mut cursor, "Interior", &pairs);
        for slot in &slots {
            assert!(slot.top + grid.row_height() <= 780.0);
        }
        // Three rows fit below the heading on the first page
        assert_eq!(slots[5].page, 0);
        assert_eq!(slots[6].page, 1);
        assert_eq!(slots[6].column, 0);
        assert_eq!(slots[6].top, 40.0);
        assert_eq!(slots[6].page, slots[7].page);
    }

    #[test]
    fn test_placeholder_and_caption_text() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let grid = PhotoGridRenderer::new(BuiltinFontSet::default());
        let photos = [
            photo(PhotoCategory::Damage, Some("Rear bumper")),
            photo(PhotoCategory::Damage, None),
        ];
        let images = [LoadedImage::FetchFailed, LoadedImage::DecodeFailed];
        let pairs: Vec<_> = photos.iter().zip(images.iter()).collect();

        let slots = grid.render_group(&mut cursor, "Damage", &pairs);
        assert_eq!(slots[0].state, SlotState::FetchFailed);
        assert_eq!(slots[1].state, SlotState::DecodeFailed);
        let texts = cursor.layer().texts();
        assert_eq!(
            texts,
            [
                "Damage",
                FETCH_FAILED_TEXT,
                "Damage - Rear bumper",
                DECODE_FAILED_TEXT,
                "Damage",
            ]
        );
    }

    #[test]
    fn test_heading_kept_with_first_row() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let grid = PhotoGridRenderer::new(BuiltinFontSet::default());
        cursor.set_y(600.0);
        let photos = [photo(PhotoCategory::Other, None)];
        let images = [LoadedImage::FetchFailed];
        let pairs: Vec<_> = photos.iter().zip(images.iter()).collect();

        let slots = grid.render_group(&mut cursor, "Other", &pairs);
        assert_eq!(cursor.pages()[0].texts().len(), 0);
        assert_eq!(slots[0].page, 1);
        assert_eq!(slots[0].top, 54.0);
    }

    #[test]
    fn test_single_block() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let grid = PhotoGridRenderer::new(BuiltinFontSet::default());
        let signature = photo(PhotoCategory::Signature, None);
        let slot = grid.render_single(
            &mut cursor,
            "Customer Signature",
            &signature,
            &LoadedImage::FetchFailed,
            110.0,
        );
        assert_eq!(slot.top, 54.0);
        assert_eq!(slot.category, PhotoCategory::Signature);
        assert_eq!(cursor.y(), 54.0 + 110.0 + 14.0 + 8.0 + 4.0);
    }
}
