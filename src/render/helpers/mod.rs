//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod cursor;
pub mod fonts;
pub mod layer;
pub mod text_metrics;

pub use compress::{compress_or_keep, compress_pdf};
pub use cursor::{PageCursor, PageGeometry};
pub use fonts::{BuiltinFontSet, FontFamily};
pub use layer::{Align, LayerBuilder};
pub use text_metrics::{
    get_builtin_measurer, get_helvetica_bold_measurer, get_helvetica_measurer,
    get_times_bold_measurer, get_times_measurer, BuiltinFontMeasurer,
};
