//! Error types for report generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur on the fallible edges of report generation.
///
/// Unrecognized roles and formats are not errors; they degrade to empty
/// output by contract.
#[derive(Error, Debug)]
pub enum ReportError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item source failed to produce items.
    #[error("item source error: {0}")]
    Source(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
