//! Section title: bold heading over a full-width rule

use crate::render::helpers::colors::BLACK;
use crate::render::helpers::cursor::PageCursor;
use crate::render::helpers::fonts::BuiltinFontSet;

/// Renderer for section headings such as "Vehicle Checks"
pub struct SectionRenderer {
    fonts: BuiltinFontSet,
    font_size: f32,
    /// Space required before drawing, or the title moves to a new page
    min_space: f32,
    /// Gap above the title text
    space_before: f32,
    /// Distance from the title top to the rule
    rule_offset: f32,
    rule_thickness: f32,
    /// Gap between the rule and the following content
    space_after: f32,
}

impl SectionRenderer {
    pub fn new(fonts: BuiltinFontSet) -> Self {
        Self {
            fonts,
            font_size: 11.0,
            min_space: 26.0,
            space_before: 8.0,
            rule_offset: 14.0,
            rule_thickness: 0.8,
            space_after: 6.0,
        }
    }

    /// Total height a title occupies
    pub fn height(&self) -> f32 {
        self.space_before + self.rule_offset + self.space_after
    }

    pub fn render(&self, cursor: &mut PageCursor, title: &str) {
        cursor.ensure_space(self.min_space);
        cursor.advance(self.space_before);

        let geometry = *cursor.geometry();
        let top = cursor.y();
        let rule_y = top + self.rule_offset;

        let layer = cursor.layer();
        layer.set_fill_color(BLACK);
        layer.use_text(title, self.font_size, geometry.left, top, self.fonts.bold);

        layer.set_outline_color(BLACK);
        layer.set_outline_thickness(self.rule_thickness);
        layer.add_line(geometry.left, rule_y, geometry.right, rule_y);

        cursor.set_y(rule_y + self.space_after);
    }
}
