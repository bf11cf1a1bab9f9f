//! Role-aware report generator.
//!
//! Formats a list of business items into CSV or HTML based on the viewing
//! user's role:
//!
//! - Admins see every item; items above the priority limit are flagged and
//!   rendered bold in HTML.
//! - Users see only items at or below the value limit.
//! - Any other role sees an empty report.
//!
//! The total always covers exactly the visible item set, and unrecognized
//! roles or formats degrade to empty output rather than errors.
//!
//! # Example
//!
//! ```
//! use rr_common::{Item, ReportFormat, Role, User};
//! use rr_report::{InMemorySource, ReportGenerator};
//!
//! let items = vec![Item::new(1, "A", 100.0), Item::new(2, "B", 600.0)];
//! let generator = ReportGenerator::new(Box::new(InMemorySource::new(vec![])));
//! let user = User::new("Alice", Role::User);
//! let csv = generator.generate(ReportFormat::Csv, &user, &items);
//! assert!(csv.starts_with("ID,NOME,VALOR,USUARIO"));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod render;
pub mod select;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use generator::{InMemorySource, ItemSource, ReportGenerator, ReportRequest};
