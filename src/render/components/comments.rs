//! Free-text comments in a padded rounded box sized to the wrapped text

use log::warn;
use printpdf::PaintMode;

use crate::render::helpers::colors::{BORDER, DARK, LIGHT_BG};
use crate::render::helpers::cursor::{PageCursor, PageGeometry};
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::Align;

pub struct CommentsRenderer {
    fonts: BuiltinFontSet,
    padding: f32,
    font_size: f32,
    line_gap: f32,
    corner_radius: f32,
    space_after: f32,
}

impl CommentsRenderer {
    pub fn new(fonts: BuiltinFontSet) -> Self {
        Self {
            fonts,
            padding: 10.0,
            font_size: 9.0,
            line_gap: 3.0,
            corner_radius: 3.0,
            space_after: 4.0,
        }
    }

    fn line_step(&self) -> f32 {
        self.fonts.measurer(false).line_height_pt(self.font_size) + self.line_gap
    }

    /// Height of the box for `lines` wrapped lines
    pub fn box_height(&self, lines: usize) -> f32 {
        lines as f32 * self.line_step() + self.padding * 2.0
    }

    /// Draw the comment box. Text longer than a page continues in further
    /// boxes on the following pages. Returns the number of boxes drawn.
    pub fn render(&self, cursor: &mut PageCursor, text: &str) -> usize {
        let geometry = *cursor.geometry();
        let width = geometry.content_width();
        let text_width = width - self.padding * 2.0;
        let lines = self
            .fonts
            .measurer(false)
            .wrap(text, self.font_size, text_width);
        if lines.is_empty() {
            return 0;
        }

        let page_capacity = geometry.bottom - geometry.top;
        let full_height = self.box_height(lines.len()) + self.space_after;
        if full_height <= page_capacity {
            cursor.ensure_space(full_height);
        }

        let mut remaining = &lines[..];
        let mut boxes = 0;
        let mut fresh_page = false;
        while !remaining.is_empty() {
            let room = cursor.remaining() - self.space_after - self.padding * 2.0;
            let mut fit = (room / self.line_step()).floor().max(0.0) as usize;
            if fit == 0 {
                if !fresh_page {
                    cursor.new_page();
                    fresh_page = true;
                    continue;
                }
                warn!("Page too short for a comment line; drawing it past the bottom margin");
                fit = 1;
            }
            let (chunk, rest) = remaining.split_at(fit.min(remaining.len()));

            let top = cursor.y();
            let box_height = self.box_height(chunk.len());
            let layer = cursor.layer();
            layer.set_fill_color(LIGHT_BG);
            layer.set_outline_color(BORDER);
            layer.set_outline_thickness(0.5);
            layer.add_rounded_rect(
                geometry.left,
                top,
                width,
                box_height,
                self.corner_radius,
                PaintMode::FillStroke,
            );
            layer.set_fill_color(DARK);
            layer.use_lines(
                chunk,
                self.font_size,
                geometry.left + self.padding,
                top + self.padding,
                text_width,
                Align::Left,
                self.line_gap,
                self.fonts.regular,
            );
            cursor.set_y(top + box_height + self.space_after);
            boxes += 1;

            remaining = rest;
            if !remaining.is_empty() {
                cursor.new_page();
                fresh_page = true;
            }
        }
        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_short_comment_single_box() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let renderer = CommentsRenderer::new(BuiltinFontSet::default());
        cursor.set_y(300.0);
        assert_eq!(renderer.render(&mut cursor, "Customer declined valet."), 1);
        assert_eq!(cursor.page_count(), 1);
        assert_eq!(cursor.y(), 300.0 + renderer.box_height(1) + 4.0);
    }

    #[test]
    fn test_box_moves_when_it_does_not_fit() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let renderer = CommentsRenderer::new(BuiltinFontSet::default());
        cursor.set_y(760.0);
        renderer.render(&mut cursor, "Spare key handed to the driver.");
        assert_eq!(cursor.page_count(), 2);
        assert!(cursor.pages()[0].texts().is_empty());
    }

    #[test]
    fn test_very_long_comment_spans_pages_without_overflow() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let renderer = CommentsRenderer::new(BuiltinFontSet::default());
        let text = (0..400)
            .map(|i| format!("Line {} of the inspector's notes.", i))
            .collect::<Vec<_>>()
            .join("\n");
        let boxes = renderer.render(&mut cursor, &text);
        assert!(boxes > 1);
        assert_eq!(boxes, cursor.page_count());
        assert!(cursor.y() <= 780.0);
        let drawn: usize = cursor.pages().iter().map(|p| p.texts().len()).sum();
        assert_eq!(drawn, 400);
    }

    #[test]
    fn test_page_shorter_than_a_line_still_terminates() {
        let geometry = PageGeometry {
            top: 40.0,
            bottom: 50.0,
            ..Settings::default().geometry()
        };
        let mut cursor = PageCursor::new(geometry);
        let renderer = CommentsRenderer::new(BuiltinFontSet::default());
        let boxes = renderer.render(&mut cursor, "Keys\nManual\nSD card");
        assert_eq!(boxes, 3);
        let drawn: usize = cursor.pages().iter().map(|p| p.texts().len()).sum();
        assert_eq!(drawn, 3);
    }

    #[test]
    fn test_blank_comment_draws_nothing() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let renderer = CommentsRenderer::new(BuiltinFontSet::default());
        assert_eq!(renderer.render(&mut cursor, "   "), 0);
        assert!(cursor.layer().ops().is_empty());
    }
}
