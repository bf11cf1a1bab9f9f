//! Report configuration types.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// Report configuration.
///
/// The selection thresholds are fixed business rules, not configuration;
/// the only knob is the markup heading.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Custom report title, used as the HTML heading.
    pub title: Option<String>,
}

impl ReportConfig {
    /// Default HTML heading when no title is configured.
    pub const DEFAULT_TITLE: &'static str = "Relatorio de Itens";

    /// Create a new report configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Heading rendered at the top of HTML reports.
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE)
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ReportError::InvalidConfig(e.to_string()))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.title, None);
        assert_eq!(config.heading(), ReportConfig::DEFAULT_TITLE);
    }

    #[test]
    fn test_config_builder() {
        let config = ReportConfig::new().with_title("Monthly Items");
        assert_eq!(config.heading(), "Monthly Items");
    }

    #[test]
    fn test_config_serialization() {
        let config = ReportConfig::new().with_title("Test Report");
        let json = config.to_json().unwrap();
        let parsed = ReportConfig::from_json(&json).unwrap();
        assert_eq!(parsed.title, config.title);
    }

    #[test]
    fn test_config_invalid_json() {
        let err = ReportConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig(_)));
    }
}
