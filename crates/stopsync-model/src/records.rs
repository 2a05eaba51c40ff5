//! Row types for the three source registries and the two output tables.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// One row of the general bus-stop registry.
///
/// A row pairs a stop with one route it is served by, so the same stop id
/// appears once per route and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralStopRow {
    pub stop_id: Option<String>,
    pub stop_name: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub route_number: String,
    pub direction: Direction,
    #[serde(default)]
    pub zone: String,
}

/// One row of the rapid or rail registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRecord {
    /// Identifier issued by the registry.
    #[serde(rename = "stop_id")]
    pub registry_id: String,
    #[serde(default)]
    pub stop_code: Option<String>,
    #[serde(default)]
    pub stop_name: Option<String>,
}

impl AuthorityRecord {
    pub fn new(
        registry_id: impl Into<String>,
        stop_code: Option<&str>,
        stop_name: Option<&str>,
    ) -> Self {
        Self {
            registry_id: registry_id.into(),
            stop_code: stop_code.map(str::to_string),
            stop_name: stop_name.map(str::to_string),
        }
    }
}

/// A physical stop in the canonical stop table.
///
/// `stop_id` starts out as the general registry's raw id and is replaced by
/// the canonical id when identity resolution succeeds. Field order matches
/// the output column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_code: Option<String>,
    pub stop_name: Option<String>,
    pub street_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl StopRecord {
    /// Build the initial record from a general registry row.
    ///
    /// Returns `None` when the row carries no stop id.
    pub fn from_row(row: &GeneralStopRow) -> Option<Self> {
        let stop_id = row.stop_id.as_deref()?.trim();
        if stop_id.is_empty() {
            return None;
        }
        Some(Self {
            stop_id: stop_id.to_string(),
            stop_code: None,
            stop_name: row.stop_name.clone(),
            street_name: row.street_name.clone(),
            latitude: row.latitude,
            longitude: row.longitude,
        })
    }
}

/// A (route, stop, direction) link with its position along the route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteLink {
    pub route_number: String,
    pub stop_id: Option<String>,
    pub direction: Direction,
    pub zone: String,
    pub sequence: u32,
}

impl RouteLink {
    /// Deduplication key. Links without a stop id share the `None` slot of
    /// their route and direction.
    pub fn key(&self) -> (&str, Option<&str>, &Direction) {
        (
            self.route_number.as_str(),
            self.stop_id.as_deref(),
            &self.direction,
        )
    }
}
