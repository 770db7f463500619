pub mod aggregate;
pub mod check;
pub mod check_items;
pub mod handover;
pub mod photo;
pub mod tyre;
pub mod vehicle;

pub use aggregate::HandoverAggregate;
pub use check::CheckEntry;
pub use check_items::{CheckItemLabelTable, CheckItemLabels};
pub use handover::{HandoverKind, HandoverRecord, HandoverStatus};
pub use photo::{group_by_category, PhotoCategory, PhotoEntry, PhotoGroup};
pub use tyre::{TyreEntry, TyrePosition, TyreType};
pub use vehicle::VehicleRecord;
