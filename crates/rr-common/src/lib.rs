//! Shared types for role-aware report generation.
//!
//! This crate provides the domain types consumed by rr-report:
//! - The immutable report inputs (`User`, `Role`, `Item`)
//! - The processed item view produced by role selection (`VisibleItem`)
//! - The report format specification (`ReportFormat`)

pub mod model;
pub mod output;

pub use model::{Item, Role, User, VisibleItem};
pub use output::ReportFormat;
