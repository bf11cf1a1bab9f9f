//! Report format specifications.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Delimited-text report (default for machine consumption)
    #[default]
    Csv,

    /// Markup report for human viewing
    Html,
}

impl ReportFormat {
    /// Parse a format from its wire name.
    ///
    /// Recognizes exactly `CSV` and `HTML`; any other value is `None`, which
    /// callers map to an empty report rather than an error.
    pub fn parse(s: &str) -> Option<ReportFormat> {
        match s {
            "CSV" => Some(ReportFormat::Csv),
            "HTML" => Some(ReportFormat::Html),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_formats() {
        assert_eq!(ReportFormat::parse("CSV"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::parse("HTML"), Some(ReportFormat::Html));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ReportFormat::parse("csv"), None);
        assert_eq!(ReportFormat::parse("Html"), None);
    }

    #[test]
    fn test_parse_unrecognized_format() {
        assert_eq!(ReportFormat::parse("XML"), None);
        assert_eq!(ReportFormat::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
        assert_eq!(ReportFormat::Html.to_string(), "html");
    }
}
