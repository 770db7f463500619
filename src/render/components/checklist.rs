//! "Vehicle Checks" table: checkbox, item label, right-aligned comments

use crate::model::{CheckEntry, CheckItemLabels};
use crate::render::helpers::colors::{DARK, GRAY};
use crate::render::helpers::fonts::BuiltinFontSet;
use crate::render::helpers::layer::Align;

use super::table::{Column, TableRenderer, TableRow};

const LABEL_X: f32 = 22.0;
const LABEL_WIDTH: f32 = 275.0;
const COMMENTS_X: f32 = 310.0;
const CHECKBOX_X: f32 = 6.0;

/// Table layout for check entries across `content_width`
pub fn checklist_table(fonts: BuiltinFontSet, content_width: f32) -> TableRenderer {
    let columns = vec![
        Column::new("CHECK ITEM", LABEL_X, LABEL_WIDTH)
            .font_size(8.0)
            .color(DARK)
            .wrap(),
        Column::new("COMMENTS", COMMENTS_X, content_width - 320.0)
            .font_size(7.0)
            .color(GRAY)
            .align(Align::Right)
            .top_offset(1.0)
            .wrap(),
    ];
    TableRenderer::new(fonts, columns)
        .checkbox_at(CHECKBOX_X)
        .min_row_height(11.0)
        .row_padding(4.0)
}

/// One row per check, in stored order. Missing comments stay blank.
pub fn checklist_rows(checks: &[CheckEntry], labels: &dyn CheckItemLabels) -> Vec<TableRow> {
    checks
        .iter()
        .map(|check| {
            TableRow::new(vec![
                labels.resolve(&check.check_item_key),
                check.comments().unwrap_or_default().to_string(),
            ])
            .with_check(check.checked)
        })
        .collect()
}
