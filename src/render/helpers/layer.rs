//! Drawing layer over printpdf's op list
//!
//! `LayerBuilder` collects `Op`s for one page. Callers work in top-down
//! points (y grows down the page, text is positioned by the top of its line
//! box); the flip to PDF's bottom-up space happens here and nowhere else.

use printpdf::{
    BuiltinFont, Color, Line, LinePoint, Op, PaintMode, Point, Polygon,
    PolygonRing, Pt, Rgb, TextItem, WindingOrder, XObjectId, XObjectTransform,
};

use super::text_metrics::get_builtin_measurer;

/// Cubic Bezier constant for quarter circles
const KAPPA: f32 = 0.552_284_8;

/// Horizontal alignment of text inside a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A builder that collects PDF operations for one page
pub struct LayerBuilder {
    ops: Vec<Op>,
    page_height: f32,
    /// Every string drawn on this page, in drawing order
    texts: Vec<String>,
}

impl LayerBuilder {
    pub fn new(page_height: f32) -> Self {
        Self {
            ops: Vec::new(),
            page_height,
            texts: Vec::new(),
        }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Strings drawn on this page, in drawing order
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    fn point(&self, x: f32, y: f32) -> Point {
        Point {
            x: Pt(x),
            y: Pt(self.page_height - y),
        }
    }

    fn corner(&self, x: f32, y: f32) -> LinePoint {
        LinePoint {
            p: self.point(x, y),
            bezier: false,
        }
    }

    fn control(&self, x: f32, y: f32) -> LinePoint {
        LinePoint {
            p: self.point(x, y),
            bezier: true,
        }
    }

    /// Set the fill color (also used for text)
    pub fn set_fill_color(&mut self, color: Rgb) {
        self.ops.push(Op::SetFillColor {
            col: Color::Rgb(color),
        });
    }

    /// Set the outline/stroke color
    pub fn set_outline_color(&mut self, color: Rgb) {
        self.ops.push(Op::SetOutlineColor {
            col: Color::Rgb(color),
        });
    }

    /// Set the outline thickness in points
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw one line of text whose line box starts at `top`
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: f32,
        top: f32,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        let baseline = top + get_builtin_measurer(font).ascender_pt(font_size);
        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: self.point(x, baseline),
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font_size),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text_str.clone())],
            font,
        });
        self.ops.push(Op::EndTextSection);
        self.texts.push(text_str);
    }

    /// Draw one line of text aligned inside `[x, x + width]`
    #[allow(clippy::too_many_arguments)]
    pub fn use_text_aligned<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: f32,
        top: f32,
        width: f32,
        align: Align,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        let text_width = get_builtin_measurer(font).measure_width_pt(&text_str, font_size);
        let start = match align {
            Align::Left => x,
            Align::Center => x + (width - text_width) / 2.0,
            Align::Right => x + width - text_width,
        };
        self.use_text(text_str, font_size, start, top, font);
    }

    /// Draw pre-wrapped lines, one line box apart plus `line_gap`.
    /// Returns the height consumed.
    #[allow(clippy::too_many_arguments)]
    pub fn use_lines(
        &mut self,
        lines: &[String],
        font_size: f32,
        x: f32,
        top: f32,
        width: f32,
        align: Align,
        line_gap: f32,
        font: BuiltinFont,
    ) -> f32 {
        let step = get_builtin_measurer(font).line_height_pt(font_size) + line_gap;
        for (i, line) in lines.iter().enumerate() {
            let line_top = top + i as f32 * step;
            self.use_text_aligned(line.as_str(), font_size, x, line_top, width, align, font);
        }
        lines.len() as f32 * step
    }

    /// Add a rectangle given its top-left corner and size
    pub fn add_rect(&mut self, x: f32, top: f32, width: f32, height: f32, mode: PaintMode) {
        let points = vec![
            self.corner(x, top + height),
            self.corner(x + width, top + height),
            self.corner(x + width, top),
            self.corner(x, top),
        ];
        self.push_polygon(points, mode);
    }

    /// Add a rectangle with quarter-circle corners
    pub fn add_rounded_rect(
        &mut self,
        x: f32,
        top: f32,
        width: f32,
        height: f32,
        radius: f32,
        mode: PaintMode,
    ) {
        let r = radius.min(width / 2.0).min(height / 2.0);
        if r <= 0.0 {
            self.add_rect(x, top, width, height, mode);
            return;
        }
        let k = KAPPA * r;
        let right = x + width;
        let bottom = top + height;

        let points = vec![
            self.corner(x + r, top),
            self.corner(right - r, top),
            self.control(right - r + k, top),
            self.control(right, top + r - k),
            self.control(right, top + r),
            self.corner(right, bottom - r),
            self.control(right, bottom - r + k),
            self.control(right - r + k, bottom),
            self.control(right - r, bottom),
            self.corner(x + r, bottom),
            self.control(x + r - k, bottom),
            self.control(x, bottom - r + k),
            self.control(x, bottom - r),
            self.corner(x, top + r),
            self.control(x, top + r - k),
            self.control(x + r - k, top),
            self.control(x + r, top),
        ];
        self.push_polygon(points, mode);
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.add_polyline(&[(x1, y1), (x2, y2)]);
    }

    /// Stroke an open path through `points`
    pub fn add_polyline(&mut self, points: &[(f32, f32)]) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|&(x, y)| self.corner(x, y)).collect();
        self.ops.push(Op::DrawLine {
            line: Line {
                points,
                is_closed: false,
            },
        });
    }

    /// Save graphics state
    pub fn save_graphics_state(&mut self) {
        self.ops.push(Op::SaveGraphicsState);
    }

    /// Restore graphics state
    pub fn restore_graphics_state(&mut self) {
        self.ops.push(Op::RestoreGraphicsState);
    }

    /// Place an embedded image so it fills the box at (x, top, width, height).
    ///
    /// The image is registered at 72 dpi, so one pixel is one point before
    /// scaling.
    pub fn use_image(
        &mut self,
        id: XObjectId,
        pixel_size: (u32, u32),
        x: f32,
        top: f32,
        width: f32,
        height: f32,
    ) {
        let (px_w, px_h) = pixel_size;
        if px_w == 0 || px_h == 0 {
            return;
        }
        let transform = XObjectTransform {
            translate_x: Some(Pt(x)),
            translate_y: Some(Pt(self.page_height - (top + height))),
            rotate: None,
            scale_x: Some(width / px_w as f32),
            scale_y: Some(height / px_h as f32),
            dpi: Some(72.0),
        };
        self.ops.push(Op::UseXobject { id, transform });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_H: f32 = 841.89;

    fn polygon_points(op: &Op) -> Vec<(f32, f32)> {
        match op {
            Op::DrawPolygon { polygon } => polygon.rings[0]
                .points
                .iter()
                .map(|lp| (lp.p.x.0, lp.p.y.0))
                .collect(),
            _ => panic!("expected polygon"),
        }
    }

    #[test]
    fn test_rect_flips_to_bottom_up() {
        let mut layer = LayerBuilder::new(PAGE_H);
        layer.add_rect(40.0, 100.0, 50.0, 20.0, PaintMode::Fill);
        let points = polygon_points(&layer.ops()[0]);
        // Lower-left corner is the top-down bottom edge
        assert!((points[0].0 - 40.0).abs() < 0.001);
        assert!((points[0].1 - (PAGE_H - 120.0)).abs() < 0.001);
        assert!((points[2].1 - (PAGE_H - 100.0)).abs() < 0.001);
    }

    #[test]
    fn test_text_baseline_below_top() {
        let mut layer = LayerBuilder::new(PAGE_H);
        layer.use_text("Vehicle Checks", 10.0, 40.0, 100.0, BuiltinFont::Helvetica);
        let cursor = layer
            .ops()
            .iter()
            .find_map(|op| match op {
                Op::SetTextCursor { pos } => Some(pos.y.0),
                _ => None,
            })
            .unwrap();
        assert!((cursor - (PAGE_H - 107.18)).abs() < 0.01);
        assert_eq!(layer.texts(), ["Vehicle Checks"]);
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new(PAGE_H);
        layer.use_text("", 10.0, 40.0, 100.0, BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());
        assert!(layer.texts().is_empty());
    }

    #[test]
    fn test_right_alignment() {
        let mut layer = LayerBuilder::new(PAGE_H);
        let font = BuiltinFont::Helvetica;
        layer.use_text_aligned("N/A", 8.0, 40.0, 10.0, 200.0, Align::Right, font);
        let width = get_builtin_measurer(font).measure_width_pt("N/A", 8.0);
        let x = layer
            .ops()
            .iter()
            .find_map(|op| match op {
                Op::SetTextCursor { pos } => Some(pos.x.0),
                _ => None,
            })
            .unwrap();
        assert!((x + width - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let mut layer = LayerBuilder::new(PAGE_H);
        layer.add_rounded_rect(40.0, 200.0, 515.0, 52.0, 4.0, PaintMode::FillStroke);
        for (x, y) in polygon_points(&layer.ops()[0]) {
            assert!((40.0..=555.0).contains(&x));
            assert!((PAGE_H - 252.0..=PAGE_H - 200.0).contains(&y));
        }
    }

    #[test]
    fn test_polyline_is_open() {
        let mut layer = LayerBuilder::new(PAGE_H);
        layer.add_polyline(&[(0.0, 0.0), (2.0, 3.0), (6.0, -1.0)]);
        match &layer.ops()[0] {
            Op::DrawLine { line } => {
                assert_eq!(line.points.len(), 3);
                assert!(!line.is_closed);
            }
            _ => panic!("expected line"),
        }
    }
}
