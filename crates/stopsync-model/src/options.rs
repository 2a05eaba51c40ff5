//! Configuration options for a reconciliation run.

use serde::{Deserialize, Serialize};

/// Default marker of ids that are already canonical.
pub const DEFAULT_NATIVE_ID_PREFIX: &str = "1";

/// Default marker of off-service routes excluded from route links.
pub const DEFAULT_EXCLUDED_ROUTE_MARKER: &str = "(OS)";

/// Mode for stop and street name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NameNormalizationMode {
    /// Leave names as extracted.
    Skip,
    /// Apply the rule table to stop and street names.
    #[default]
    Normalize,
}

/// Options controlling run behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Ids starting with this prefix are kept as canonical without lookup.
    pub native_id_prefix: String,

    /// Route numbers containing this marker are dropped before route links
    /// are built. `None` keeps every route.
    pub excluded_route_marker: Option<String>,

    /// Whether names are normalized.
    pub name_normalization: NameNormalizationMode,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            native_id_prefix: DEFAULT_NATIVE_ID_PREFIX.to_string(),
            excluded_route_marker: Some(DEFAULT_EXCLUDED_ROUTE_MARKER.to_string()),
            name_normalization: NameNormalizationMode::Normalize,
        }
    }
}

impl ProcessingOptions {
    pub fn with_excluded_route_marker(mut self, marker: Option<String>) -> Self {
        self.excluded_route_marker = marker;
        self
    }

    pub fn with_native_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.native_id_prefix = prefix.into();
        self
    }

    pub fn with_name_normalization(mut self, mode: NameNormalizationMode) -> Self {
        self.name_normalization = mode;
        self
    }

    /// Whether a stop id is already canonical. An empty prefix marks nothing.
    pub fn is_native_id(&self, stop_id: &str) -> bool {
        !self.native_id_prefix.is_empty() && stop_id.starts_with(self.native_id_prefix.as_str())
    }

    /// Whether a route number is excluded from route-link processing.
    pub fn is_excluded_route(&self, route_number: &str) -> bool {
        self.excluded_route_marker
            .as_deref()
            .is_some_and(|marker| !marker.is_empty() && route_number.contains(marker))
    }
}
