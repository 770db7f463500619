//! Page layouts

pub mod handover_report;

pub use handover_report::{AssembledReport, HandoverReportRenderer, PhotoPlan};
