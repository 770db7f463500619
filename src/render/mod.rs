//! PDF rendering modules

pub mod components;
pub mod helpers;
pub mod layouts;

// Re-export commonly used items for convenience
pub use helpers::{BuiltinFontSet, FontFamily, LayerBuilder, PageCursor, PageGeometry};
pub use layouts::{AssembledReport, HandoverReportRenderer, PhotoPlan};
