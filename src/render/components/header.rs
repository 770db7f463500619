//! Branded page header, report title and status pill

use printpdf::PaintMode;

use crate::model::{HandoverKind, HandoverStatus};
use crate::render::helpers::colors::{
    AMBER, AMBER_BG, BLACK, GRAY, GREEN, GREEN_BG, HEADER_SUBTLE, WHITE,
};
use crate::render::helpers::cursor::PageCursor;
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::{Align, LayerBuilder};

pub const REPORT_TITLE: &str = "Vehicle Handover Report";

/// Company details printed on the header band
#[derive(Debug, Clone)]
pub struct Branding {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Renderer for the black header band and the title line
pub struct HeaderRenderer<'a> {
    fonts: BuiltinFontSet,
    branding: &'a Branding,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(fonts: BuiltinFontSet, branding: &'a Branding) -> Self {
        Self { fonts, branding }
    }

    /// Full header for the first page: word-mark left, address and phone
    /// right-aligned on two lines
    pub fn render_full(&self, cursor: &mut PageCursor) {
        let band_height = 64.0;
        let geometry = *cursor.geometry();
        let layer = cursor.layer();

        layer.set_fill_color(BLACK);
        layer.add_rect(0.0, 0.0, geometry.width, band_height, PaintMode::Fill);
        self.draw_word_mark(layer, geometry.left, 20.0, 1.0);

        layer.set_fill_color(HEADER_SUBTLE);
        let width = geometry.content_width();
        let font = self.fonts.regular;
        layer.use_text_aligned(
            self.branding.address.as_str(),
            7.5,
            geometry.left,
            22.0,
            width,
            Align::Right,
            font,
        );
        layer.use_text_aligned(
            self.branding.phone.as_str(),
            7.5,
            geometry.left,
            34.0,
            width,
            Align::Right,
            font,
        );

        cursor.set_y(band_height + 10.0);
    }

    /// Slimmer header for the photo pages
    pub fn render_compact(&self, cursor: &mut PageCursor) {
        let band_height = 48.0;
        let geometry = *cursor.geometry();
        let layer = cursor.layer();

        layer.set_fill_color(BLACK);
        layer.add_rect(0.0, 0.0, geometry.width, band_height, PaintMode::Fill);
        self.draw_word_mark(layer, geometry.left, 14.0, 0.85);

        layer.set_fill_color(HEADER_SUBTLE);
        let contact = format!("{}  |  {}", self.branding.address, self.branding.phone);
        layer.use_text_aligned(
            contact,
            7.0,
            geometry.left,
            20.0,
            geometry.content_width(),
            Align::Right,
            self.fonts.regular,
        );

        cursor.set_y(band_height + 10.0);
    }

    /// Company name as a word-mark: small first word, large bold middle,
    /// small last word. Names of one or two words are set bold throughout.
    fn draw_word_mark(&self, layer: &mut LayerBuilder, x: f32, top: f32, scale: f32) {
        let large = 18.0 * scale;
        layer.set_fill_color(WHITE);

        let words: Vec<&str> = self.branding.name.split_whitespace().collect();
        if words.len() < 3 {
            layer.use_text(self.branding.name.as_str(), large, x, top, self.fonts.bold);
            return;
        }

        let first = words[0];
        let last = words[words.len() - 1];
        let middle = words[1..words.len() - 1].join(" ");
        let small_first = 11.0 * scale;
        let small_last = 10.0 * scale;

        let regular = self.fonts.measurer(false);
        let bold = self.fonts.measurer(true);

        layer.use_text(
            first,
            small_first,
            x,
            top + (large - small_first) * 0.55,
            self.fonts.regular,
        );
        let middle_x = x + regular.measure_width_pt(first, small_first) + 5.0 * scale;
        layer.use_text(middle.as_str(), large, middle_x, top, self.fonts.bold);
        let last_x = middle_x + bold.measure_width_pt(&middle, large) + 4.0 * scale;
        layer.use_text(
            last,
            small_last,
            last_x,
            top + (large - small_last) * 0.45,
            self.fonts.regular,
        );
    }

    /// Title on the left, handover kind beside it, status pill flush right
    pub fn render_title(&self, cursor: &mut PageCursor, kind: HandoverKind, status: HandoverStatus) {
        let title_size = 15.0;
        let geometry = *cursor.geometry();
        let top = cursor.y();
        let layer = cursor.layer();

        layer.set_fill_color(BLACK);
        layer.use_text(REPORT_TITLE, title_size, geometry.left, top, self.fonts.bold);

        let title_width = self
            .fonts
            .measurer(true)
            .measure_width_pt(REPORT_TITLE, title_size);
        layer.set_fill_color(GRAY);
        layer.use_text(
            kind.label(),
            9.0,
            geometry.left + title_width + 8.0,
            top + 5.0,
            self.fonts.regular,
        );

        draw_status_pill(layer, &self.fonts, status, geometry.right, top);
        cursor.advance(22.0);
    }
}

/// Rounded badge ending at `right`: amber for drafts, green once completed
pub fn draw_status_pill(
    layer: &mut LayerBuilder,
    fonts: &BuiltinFontSet,
    status: HandoverStatus,
    right: f32,
    top: f32,
) {
    let (text_color, fill) = match status {
        HandoverStatus::Completed => (GREEN, GREEN_BG),
        HandoverStatus::Draft => (AMBER, AMBER_BG),
    };
    let text = status.badge_text();
    let font_size = 8.0;
    let width = fonts.measurer(true).measure_width_pt(text, font_size) + 14.0;

    layer.set_fill_color(fill);
    layer.add_rounded_rect(right - width, top - 2.0, width, 18.0, 3.0, PaintMode::Fill);
    layer.set_fill_color(text_color);
    layer.use_text(text, font_size, right - width + 7.0, top + 3.0, fonts.bold);
}
