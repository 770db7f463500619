//! Vehicle-details summary: a rounded box of label/value pairs, three per row

use printpdf::PaintMode;

use crate::render::helpers::colors::{BORDER, DARK, GRAY, LIGHT_BG};
use crate::render::helpers::cursor::PageCursor;
use crate::render::helpers::fonts::BuiltinFontSet;

/// Shown for fields with no value
pub const EMPTY_VALUE: &str = "N/A";

pub struct DetailsBoxRenderer {
    fonts: BuiltinFontSet,
    box_height: f32,
    corner_radius: f32,
    padding_x: f32,
    first_row_offset: f32,
    row_spacing: f32,
    label_font_size: f32,
    value_font_size: f32,
    /// Offset from a label's top to its value's top
    value_offset: f32,
}

impl DetailsBoxRenderer {
    pub fn new(fonts: BuiltinFontSet) -> Self {
        Self {
            fonts,
            box_height: 52.0,
            corner_radius: 4.0,
            padding_x: 10.0,
            first_row_offset: 6.0,
            row_spacing: 24.0,
            label_font_size: 6.5,
            value_font_size: 9.5,
            value_offset: 9.0,
        }
    }

    /// Draw up to six (label, value) fields in two rows of three
    pub fn render(&self, cursor: &mut PageCursor, fields: &[(&str, String)]) {
        cursor.ensure_space(self.box_height + 2.0);
        let geometry = *cursor.geometry();
        let top = cursor.y();
        let width = geometry.content_width();
        let column_width = width / 3.0;

        let layer = cursor.layer();
        layer.set_fill_color(LIGHT_BG);
        layer.set_outline_color(BORDER);
        layer.set_outline_thickness(0.5);
        layer.add_rounded_rect(
            geometry.left,
            top,
            width,
            self.box_height,
            self.corner_radius,
            PaintMode::FillStroke,
        );

        let value_measurer = self.fonts.measurer(true);
        for (i, (label, value)) in fields.iter().take(6).enumerate() {
            let (row, col) = (i / 3, i % 3);
            let x = geometry.left + self.padding_x + col as f32 * column_width;
            let row_top = top + self.first_row_offset + row as f32 * self.row_spacing;

            layer.set_fill_color(GRAY);
            layer.use_text(
                label.to_uppercase(),
                self.label_font_size,
                x,
                row_top,
                self.fonts.regular,
            );

            let value = if value.trim().is_empty() {
                EMPTY_VALUE.to_string()
            } else {
                value_measurer.truncate(
                    value.trim(),
                    self.value_font_size,
                    column_width - self.padding_x * 2.0,
                )
            };
            layer.set_fill_color(DARK);
            layer.use_text(
                value,
                self.value_font_size,
                x,
                row_top + self.value_offset,
                self.fonts.bold,
            );
        }

        cursor.set_y(top + self.box_height + 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_fields_and_blank_values() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        cursor.set_y(96.0);
        let fields = [
            ("Date", "01/03/2024".to_string()),
            ("Inspector", "   ".to_string()),
            ("Mileage", "45,000".to_string()),
        ];
        DetailsBoxRenderer::new(BuiltinFontSet::default()).render(&mut cursor, &fields);
        assert_eq!(
            cursor.layer().texts(),
            ["DATE", "01/03/2024", "INSPECTOR", "N/A", "MILEAGE", "45,000"]
        );
        assert_eq!(cursor.y(), 96.0 + 54.0);
    }
}
