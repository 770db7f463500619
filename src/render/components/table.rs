//! Generic table: dark header bar and striped rows
//!
//! Row height is measured with the same wrapping used to draw the cells, so
//! a row that passes `ensure_space` is always drawn whole on one page. Only a
//! row taller than a whole page is split, by wrapped lines, into segments on
//! consecutive pages.

use log::warn;
use printpdf::{PaintMode, Rgb};

use crate::render::helpers::colors::{
    BLACK, DARK, GREEN, LIGHT_BG, RED, RED_BG, ROW_RULE, WHITE,
};
use crate::render::helpers::cursor::{PageCursor, PageGeometry};
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::{Align, LayerBuilder};

/// Size of the checkbox square
pub const CHECKBOX_SIZE: f32 = 8.0;

/// One column of a table
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    /// Offset from the left content edge
    pub x: f32,
    pub width: f32,
    pub align: Align,
    pub bold: bool,
    pub font_size: f32,
    pub color: Rgb,
    /// Wrap long text onto more lines; otherwise it is shortened with "..."
    pub wrap: bool,
    /// Offset of the text below the row top
    pub top_offset: f32,
}

impl Column {
    pub fn new(header: &str, x: f32, width: f32) -> Self {
        Self {
            header: header.to_string(),
            x,
            width,
            align: Align::Left,
            bold: false,
            font_size: 8.0,
            color: DARK,
            wrap: false,
            top_offset: 0.0,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn top_offset(mut self, offset: f32) -> Self {
        self.top_offset = offset;
        self
    }
}

/// Display strings for one row, one per column
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Draw a checkbox in this state before the first column
    pub checked: Option<bool>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            checked: None,
        }
    }

    pub fn with_check(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }
}

/// Where a row, or one segment of a split row, ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    /// Index of the row in the input
    pub row: usize,
    /// Zero-based page index
    pub page: usize,
    /// Top-down y of the row's top edge
    pub top: f32,
    pub height: f32,
}

impl RowPlacement {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Renderer for header + rows tables
pub struct TableRenderer {
    fonts: BuiltinFontSet,
    columns: Vec<Column>,
    /// Checkbox offset from the left content edge, if rows carry one
    checkbox_x: Option<f32>,
    header_height: f32,
    header_font_size: f32,
    min_row_height: f32,
    row_padding: f32,
    rule_thickness: f32,
    repeat_header: bool,
}

impl TableRenderer {
    pub fn new(fonts: BuiltinFontSet, columns: Vec<Column>) -> Self {
        Self {
            fonts,
            columns,
            checkbox_x: None,
            header_height: 14.0,
            header_font_size: 6.5,
            min_row_height: 11.0,
            row_padding: 4.0,
            rule_thickness: 0.3,
            repeat_header: true,
        }
    }

    pub fn checkbox_at(mut self, x: f32) -> Self {
        self.checkbox_x = Some(x);
        self
    }

    pub fn min_row_height(mut self, height: f32) -> Self {
        self.min_row_height = height;
        self
    }

    pub fn row_padding(mut self, padding: f32) -> Self {
        self.row_padding = padding;
        self
    }

    /// Redraw the header bar when rows continue on a new page
    pub fn repeat_header(mut self, repeat: bool) -> Self {
        self.repeat_header = repeat;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn cell_lines(&self, column: &Column, text: &str) -> Vec<String> {
        let measurer = self.fonts.measurer(column.bold);
        if text.is_empty() {
            Vec::new()
        } else if column.wrap {
            measurer.wrap(text, column.font_size, column.width)
        } else {
            vec![measurer.truncate(text, column.font_size, column.width)]
        }
    }

    fn line_height(&self, column: &Column) -> f32 {
        self.fonts
            .measurer(column.bold)
            .line_height_pt(column.font_size)
    }

    /// Wrapped lines of every cell, one entry per column
    fn row_lines(&self, row: &TableRow) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .zip(row.cells.iter())
            .map(|(column, text)| self.cell_lines(column, text))
            .collect()
    }

    fn lines_height<S: AsRef<[String]>>(&self, lines: &[S]) -> f32 {
        let tallest = self
            .columns
            .iter()
            .zip(lines.iter())
            .map(|(column, cell)| cell.as_ref().len() as f32 * self.line_height(column))
            .fold(0.0_f32, f32::max);
        tallest.max(self.min_row_height) + self.row_padding
    }

    /// Height of a row: tallest cell or the minimum, plus padding
    pub fn row_height(&self, row: &TableRow) -> f32 {
        self.lines_height(&self.row_lines(row))
    }

    /// Height the header bar consumes, including the gap below it
    pub fn header_advance(&self) -> f32 {
        self.header_height + 1.0
    }

    /// Tallest row that fits whole on a fresh page, header included
    fn row_capacity(&self, geometry: &PageGeometry) -> f32 {
        let header = if self.repeat_header {
            self.header_advance()
        } else {
            0.0
        };
        geometry.bottom - geometry.top - header - 1.0
    }

    fn draw_header(&self, cursor: &mut PageCursor) {
        let geometry = *cursor.geometry();
        let top = cursor.y();
        let text_top = top + (self.header_height - self.header_font_size) / 2.0;

        let layer = cursor.layer();
        layer.set_fill_color(BLACK);
        layer.add_rect(
            geometry.left,
            top,
            geometry.content_width(),
            self.header_height,
            PaintMode::Fill,
        );
        layer.set_fill_color(WHITE);
        for column in &self.columns {
            layer.use_text_aligned(
                column.header.as_str(),
                self.header_font_size,
                geometry.left + column.x,
                text_top,
                column.width,
                column.align,
                self.fonts.bold,
            );
        }

        cursor.advance(self.header_advance());
    }

    fn continue_on_new_page(&self, cursor: &mut PageCursor) {
        cursor.new_page();
        if self.repeat_header {
            self.draw_header(cursor);
        }
    }

    /// Draw the header then every row, breaking pages between rows.
    /// Returns one placement per drawn segment, in order; rows that fit on a
    /// page have exactly one.
    pub fn render(&self, cursor: &mut PageCursor, rows: &[TableRow]) -> Vec<RowPlacement> {
        let capacity = self.row_capacity(cursor.geometry());
        let smallest_segment = self.min_row_height + self.row_padding + 1.0;

        // Keep the header with the first row, or its first segment
        let first_row = rows
            .first()
            .map(|r| match self.row_height(r) {
                h if h <= capacity => h + 1.0,
                _ => smallest_segment,
            })
            .unwrap_or(0.0);
        cursor.ensure_space(self.header_advance() + first_row);
        self.draw_header(cursor);

        let mut placements = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let lines = self.row_lines(row);
            let height = self.lines_height(&lines);
            if height <= capacity {
                if cursor.ensure_space(height + 1.0) && self.repeat_header {
                    self.draw_header(cursor);
                }
                placements.push(self.draw_row(cursor, index, row.checked, &lines, height));
            } else {
                placements.extend(self.render_split_row(cursor, index, row.checked, &lines));
            }
        }

        placements
    }

    /// Draw a row taller than a page as consecutive segments, each filling
    /// the rest of its page. The checkbox goes on the first segment only.
    fn render_split_row(
        &self,
        cursor: &mut PageCursor,
        index: usize,
        checked: Option<bool>,
        lines: &[Vec<String>],
    ) -> Vec<RowPlacement> {
        let mut remaining: Vec<&[String]> = lines.iter().map(|l| l.as_slice()).collect();
        let mut placements = Vec::new();
        let mut checked = checked;
        let mut fresh_page = false;

        while remaining.iter().any(|cell| !cell.is_empty()) {
            let room = cursor.remaining() - 1.0 - self.row_padding;
            let mut take: Vec<usize> = self
                .columns
                .iter()
                .zip(remaining.iter())
                .map(|(column, cell)| {
                    if room < self.min_row_height {
                        return 0;
                    }
                    let fit = ((room - column.top_offset) / self.line_height(column)).floor();
                    (fit.max(0.0) as usize).min(cell.len())
                })
                .collect();

            if take.iter().all(|&n| n == 0) {
                if !fresh_page {
                    self.continue_on_new_page(cursor);
                    fresh_page = true;
                    continue;
                }
                warn!("Page too short for a table line; drawing it past the bottom margin");
                take = remaining.iter().map(|cell| cell.len().min(1)).collect();
            }

            let segment: Vec<&[String]> = remaining
                .iter()
                .zip(take.iter())
                .map(|(&cell, &n)| &cell[..n])
                .collect();
            let height = self.lines_height(&segment);
            placements.push(self.draw_row(cursor, index, checked.take(), &segment, height));

            for (cell, &n) in remaining.iter_mut().zip(take.iter()) {
                *cell = &cell[n..];
            }
            if remaining.iter().any(|cell| !cell.is_empty()) {
                self.continue_on_new_page(cursor);
                fresh_page = true;
            }
        }

        placements
    }

    /// Stripe, checkbox, cell text and bottom rule for one row segment
    fn draw_row<S: AsRef<[String]>>(
        &self,
        cursor: &mut PageCursor,
        index: usize,
        checked: Option<bool>,
        lines: &[S],
        height: f32,
    ) -> RowPlacement {
        let top = cursor.y();
        let geometry = *cursor.geometry();
        let layer = cursor.layer();

        if index % 2 == 0 {
            layer.set_fill_color(LIGHT_BG);
            layer.add_rect(
                geometry.left,
                top,
                geometry.content_width(),
                height,
                PaintMode::Fill,
            );
        }

        if let (Some(x), Some(checked)) = (self.checkbox_x, checked) {
            draw_checkbox(layer, geometry.left + x, top + 2.0, checked);
        }

        for (column, cell) in self.columns.iter().zip(lines.iter()) {
            let cell = cell.as_ref();
            if cell.is_empty() {
                continue;
            }
            layer.set_fill_color(column.color.clone());
            layer.use_lines(
                cell,
                column.font_size,
                geometry.left + column.x,
                top + self.row_padding / 2.0 + column.top_offset,
                column.width,
                column.align,
                0.0,
                self.fonts.face(column.bold),
            );
        }

        let rule_y = top + height;
        layer.set_outline_color(ROW_RULE);
        layer.set_outline_thickness(self.rule_thickness);
        layer.add_line(geometry.left, rule_y, geometry.right, rule_y);

        let placement = RowPlacement {
            row: index,
            page: cursor.page_index(),
            top,
            height,
        };
        cursor.set_y(rule_y);
        placement
    }
}

/// Green box with a white tick, or pale red box with a red cross
pub fn draw_checkbox(layer: &mut LayerBuilder, x: f32, top: f32, checked: bool) {
    let s = CHECKBOX_SIZE;
    if checked {
        layer.set_fill_color(GREEN);
        layer.set_outline_color(GREEN);
        layer.set_outline_thickness(0.5);
        layer.add_rect(x, top, s, s, PaintMode::FillStroke);

        layer.save_graphics_state();
        layer.set_outline_color(WHITE);
        layer.set_outline_thickness(1.4);
        layer.add_polyline(&[
            (x + 1.8, top + s * 0.5),
            (x + s * 0.38, top + s - 2.0),
            (x + s - 1.8, top + 1.8),
        ]);
        layer.restore_graphics_state();
    } else {
        layer.set_fill_color(RED_BG);
        layer.set_outline_color(RED);
        layer.set_outline_thickness(0.5);
        layer.add_rect(x, top, s, s, PaintMode::FillStroke);

        layer.save_graphics_state();
        layer.set_outline_color(RED);
        layer.set_outline_thickness(1.0);
        layer.add_line(x + 2.0, top + 2.0, x + s - 2.0, top + s - 2.0);
        layer.add_line(x + s - 2.0, top + 2.0, x + 2.0, top + s - 2.0);
        layer.restore_graphics_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use printpdf::{Color, Op};

    fn two_column_table() -> TableRenderer {
        TableRenderer::new(
            BuiltinFontSet::default(),
            vec![
                Column::new("ITEM", 22.0, 275.0).wrap(),
                Column::new("NOTES", 310.0, 195.0)
                    .font_size(7.0)
                    .align(Align::Right)
                    .wrap(),
            ],
        )
    }

    #[test]
    fn test_row_height_minimum_and_padding() {
        let table = two_column_table();
        let row = TableRow::new(vec!["Lights".into(), String::new()]);
        assert_eq!(table.row_height(&row), 15.0);
    }

    #[test]
    fn test_row_height_grows_with_wrapped_text() {
        let table = two_column_table();
        let long = "scratch ".repeat(60);
        let row = TableRow::new(vec!["Bodywork".into(), long]);
        assert!(table.row_height(&row) > 30.0);
    }

    #[test]
    fn test_rows_never_cross_bottom() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table();
        let rows: Vec<TableRow> = (0..120)
            .map(|i| {
                let note = "worn ".repeat(i % 40);
                TableRow::new(vec![format!("Item {}", i), note]).with_check(i % 3 == 0)
            })
            .collect();

        let placements = table.render(&mut cursor, &rows);
        assert_eq!(placements.len(), rows.len());
        assert!(cursor.page_count() > 1);
        for (placement, row) in placements.iter().zip(&rows) {
            assert!(placement.bottom() <= 780.0);
            assert!((placement.height - table.row_height(row)).abs() < 0.001);
        }
        // Input order is kept
        for pair in placements.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(b.page > a.page || (b.page == a.page && b.top > a.top));
        }
    }

    #[test]
    fn test_header_repeats_on_continuation_pages() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table();
        let rows: Vec<TableRow> = (0..80)
            .map(|i| TableRow::new(vec![format!("Item {}", i), String::new()]))
            .collect();
        table.render(&mut cursor, &rows);
        for page in cursor.pages() {
            assert_eq!(page.texts().iter().filter(|t| *t == "ITEM").count(), 1);
        }
    }

    #[test]
    fn test_header_not_repeated_when_disabled() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table().repeat_header(false);
        let rows: Vec<TableRow> = (0..80)
            .map(|i| TableRow::new(vec![format!("Item {}", i), String::new()]))
            .collect();
        table.render(&mut cursor, &rows);
        assert!(cursor.page_count() > 1);
        let headers: usize = cursor
            .pages()
            .iter()
            .map(|p| p.texts().iter().filter(|t| *t == "ITEM").count())
            .sum();
        assert_eq!(headers, 1);
    }

    /// Top-down y of a filled rectangle's top edge
    fn polygon_top(op: &Op, page_height: f32) -> f32 {
        match op {
            Op::DrawPolygon { polygon } => {
                let highest = polygon.rings[0]
                    .points
                    .iter()
                    .map(|lp| lp.p.y.0)
                    .fold(f32::MIN, f32::max);
                page_height - highest
            }
            _ => panic!("expected polygon"),
        }
    }

    #[test]
    fn test_even_rows_striped_and_every_row_ruled() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table();
        let rows: Vec<TableRow> = (0..4)
            .map(|i| TableRow::new(vec![format!("Item {}", i), String::new()]))
            .collect();
        let placements = table.render(&mut cursor, &rows);
        let layer = cursor.layer();
        let page_height = layer.page_height();
        let ops = layer.ops();

        let stripes: Vec<usize> = ops
            .iter()
            .enumerate()
            .filter(|(_, op)| {
                matches!(op, Op::SetFillColor { col: Color::Rgb(rgb) }
                    if (rgb.r, rgb.g, rgb.b) == (LIGHT_BG.r, LIGHT_BG.g, LIGHT_BG.b))
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(stripes.len(), 2);
        for (&op_index, row) in stripes.iter().zip([0, 2]) {
            let top = polygon_top(&ops[op_index + 1], page_height);
            assert!((top - placements[row].top).abs() < 0.01);
        }

        let rules = ops
            .iter()
            .filter(|op| matches!(op, Op::DrawLine { .. }))
            .count();
        assert_eq!(rules, rows.len());
    }

    #[test]
    fn test_row_taller_than_page_is_split() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table().checkbox_at(6.0);
        let note: String = (0..900).map(|i| format!("note{} ", i)).collect();
        let rows = vec![
            TableRow::new(vec!["Before".into(), String::new()]).with_check(true),
            TableRow::new(vec!["Bodywork".into(), note.clone()]).with_check(false),
            TableRow::new(vec!["After".into(), String::new()]).with_check(true),
        ];
        assert!(table.row_height(&rows[1]) > 780.0 - 40.0);

        let placements = table.render(&mut cursor, &rows);
        for placement in &placements {
            assert!(placement.bottom() <= 780.0, "overflow: {:?}", placement);
        }
        assert_eq!(placements.first().map(|p| p.row), Some(0));
        assert_eq!(placements.last().map(|p| p.row), Some(2));

        let segments: Vec<&RowPlacement> = placements.iter().filter(|p| p.row == 1).collect();
        assert!(segments.len() > 1);
        for pair in segments.windows(2) {
            assert_eq!(pair[1].page, pair[0].page + 1);
        }

        // No page carries a header bar without rows under it
        for (index, page) in cursor.pages().iter().enumerate() {
            if page.texts().iter().any(|t| t == "ITEM") {
                assert!(placements.iter().any(|p| p.page == index));
            }
        }

        let expected = BuiltinFontSet::default()
            .measurer(false)
            .wrap(&note, 7.0, 195.0)
            .len();
        let drawn = cursor
            .pages()
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| t.starts_with("note"))
            .count();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_empty_table_draws_header_only() {
        let mut cursor = PageCursor::new(Settings::default().geometry());
        let table = two_column_table();
        let placements = table.render(&mut cursor, &[]);
        assert!(placements.is_empty());
        assert_eq!(cursor.layer().texts(), ["ITEM", "NOTES"]);
        assert_eq!(cursor.y(), 40.0 + table.header_advance());
    }
}
