//! Rendering components for PDF generation

pub mod checklist;
pub mod comments;
pub mod details_box;
pub mod footer;
pub mod header;
pub mod photo_grid;
pub mod section;
pub mod table;
pub mod tyre_table;

pub use checklist::{checklist_rows, checklist_table};
pub use comments::CommentsRenderer;
pub use details_box::DetailsBoxRenderer;
pub use footer::FooterRenderer;
pub use header::{Branding, HeaderRenderer};
pub use photo_grid::{contain_fit, LoadedImage, PhotoGridRenderer, PhotoSlot, SlotState};
pub use section::SectionRenderer;
pub use table::{Column, RowPlacement, TableRenderer, TableRow};
pub use tyre_table::{tyre_rows, tyre_table};
