//! "Tyre Information" table

use crate::model::tyre::or_dash;
use crate::model::TyreEntry;
use crate::render::helpers::fonts::BuiltinFontSet;

use super::table::{Column, TableRenderer, TableRow};

/// Five fixed columns across `content_width`
pub fn tyre_table(fonts: BuiltinFontSet, content_width: f32) -> TableRenderer {
    let columns = vec![
        Column::new("POSITION", 6.0, 65.0).bold().top_offset(1.0),
        Column::new("SIZE", 75.0, 120.0).top_offset(1.0),
        Column::new("DEPTH", 200.0, 80.0).top_offset(1.0),
        Column::new("BRAND", 285.0, 120.0).top_offset(1.0),
        Column::new("TYPE", 410.0, content_width - 416.0).top_offset(1.0),
    ];
    TableRenderer::new(fonts, columns)
        .min_row_height(11.0)
        .row_padding(4.0)
}

pub fn tyre_rows(tyres: &[TyreEntry]) -> Vec<TableRow> {
    tyres
        .iter()
        .map(|tyre| {
            TableRow::new(vec![
                tyre.position.code().to_string(),
                or_dash(tyre.size.as_deref()),
                or_dash(tyre.depth.as_deref()),
                or_dash(tyre.brand.as_deref()),
                tyre.tyre_type.label().to_string(),
            ])
        })
        .collect()
}
