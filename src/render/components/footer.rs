//! Page footer, stamped on every page once the page count is known

use crate::render::helpers::colors::{BORDER, LIGHT_GRAY};
use crate::render::helpers::cursor::PageGeometry;
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::{Align, LayerBuilder};

pub struct FooterRenderer<'a> {
    fonts: BuiltinFontSet,
    geometry: PageGeometry,
    vehicle_label: &'a str,
    generated: &'a str,
    font_size: f32,
}

impl<'a> FooterRenderer<'a> {
    /// `generated` is the already formatted generation date
    pub fn new(
        fonts: BuiltinFontSet,
        geometry: PageGeometry,
        vehicle_label: &'a str,
        generated: &'a str,
    ) -> Self {
        Self {
            fonts,
            geometry,
            vehicle_label,
            generated,
            font_size: 7.0,
        }
    }

    /// Rule under the content area, then page number, vehicle and date in
    /// thirds. `page_index` is zero-based.
    pub fn render(&self, layer: &mut LayerBuilder, page_index: usize, page_count: usize) {
        let g = &self.geometry;
        let rule_y = g.bottom + 4.0;
        layer.set_outline_color(BORDER);
        layer.set_outline_thickness(0.5);
        layer.add_line(g.left, rule_y, g.right, rule_y);

        let top = g.bottom + 10.0;
        let third = g.content_width() / 3.0;
        let font = self.fonts.regular;
        let measurer = self.fonts.measurer(false);
        let fit = |text: &str| measurer.truncate(text, self.font_size, third);

        layer.set_fill_color(LIGHT_GRAY);
        layer.use_text_aligned(
            format!("Page {} of {}", page_index + 1, page_count),
            self.font_size,
            g.left,
            top,
            third,
            Align::Left,
            font,
        );
        layer.use_text_aligned(
            fit(self.vehicle_label),
            self.font_size,
            g.left + third,
            top,
            third,
            Align::Center,
            font,
        );
        layer.use_text_aligned(
            fit(&format!("Generated {}", self.generated)),
            self.font_size,
            g.left + third * 2.0,
            top,
            third,
            Align::Right,
            font,
        );
    }

    /// Stamp every page
    pub fn render_all(&self, pages: &mut [LayerBuilder]) {
        let count = pages.len();
        for (index, layer) in pages.iter_mut().enumerate() {
            self.render(layer, index, count);
        }
    }
}
