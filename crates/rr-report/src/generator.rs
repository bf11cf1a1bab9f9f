//! Report generator implementation.

use rr_common::{Item, ReportFormat, User};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::render;
use crate::select;

/// Capability for retrieving the candidate items of a report.
pub trait ItemSource: Send + Sync {
    /// Fetch the candidate items, in presentation order.
    fn fetch_items(&self) -> Result<Vec<Item>>;
}

/// Item source backed by a fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    items: Vec<Item>,
}

impl InMemorySource {
    /// Create a source over the given items.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl ItemSource for InMemorySource {
    fn fetch_items(&self) -> Result<Vec<Item>> {
        Ok(self.items.clone())
    }
}

/// A complete report request, as accepted on the JSON entry point.
///
/// The format travels as a string so that unrecognized values keep the
/// valid-but-empty contract instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Requested output format (`CSV` or `HTML`).
    pub format: String,
    /// The user the report is generated for.
    pub user: User,
    /// Candidate items, in presentation order.
    pub items: Vec<Item>,
}

/// Role-aware report generator.
pub struct ReportGenerator {
    config: ReportConfig,
    source: Box<dyn ItemSource>,
}

impl ReportGenerator {
    /// Create a generator over an item source with default configuration.
    pub fn new(source: Box<dyn ItemSource>) -> Self {
        Self::with_config(ReportConfig::default(), source)
    }

    /// Create a generator with explicit configuration.
    pub fn with_config(config: ReportConfig, source: Box<dyn ItemSource>) -> Self {
        Self { config, source }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Generate a report in the given format.
    ///
    /// Pure with respect to its arguments: selection, total, and rendering
    /// depend only on `format`, `user`, and `items`.
    pub fn generate(&self, format: ReportFormat, user: &User, items: &[Item]) -> String {
        debug!(%format, role = %user.role, items = items.len(), "generating report");

        let visible = select::visible_items(user.role, items);
        let total = select::total(&visible);

        let output = match format {
            ReportFormat::Csv => render::csv::render(user, &visible, total),
            ReportFormat::Html => {
                render::html::render(self.config.heading(), user, &visible, total)
            }
        };

        info!(bytes = output.len(), visible = visible.len(), "report generated");
        output
    }

    /// Generate a report from a wire-format name.
    ///
    /// Unrecognized format names yield an empty string, not an error.
    pub fn generate_report(&self, format: &str, user: &User, items: &[Item]) -> String {
        match ReportFormat::parse(format) {
            Some(format) => self.generate(format, user, items),
            None => String::new(),
        }
    }

    /// Generate a report over items fetched from the injected source.
    pub fn generate_from_source(&self, format: ReportFormat, user: &User) -> Result<String> {
        let items = self.source.fetch_items()?;
        Ok(self.generate(format, user, &items))
    }

    /// Generate a report from a JSON request.
    pub fn generate_from_json(&self, json: &str) -> Result<String> {
        let request: ReportRequest = serde_json::from_str(json)?;
        Ok(self.generate_report(&request.format, &request.user, &request.items))
    }
}
