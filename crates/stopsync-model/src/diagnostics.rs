//! Advisory diagnostics collected during a run.
//!
//! Diagnostics never abort a run. They are rendered as human-readable lines
//! by the CLI and carry no machine-readable contract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// A stop whose canonical id could not be resolved; its raw id was retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedStop {
    pub stop_id: String,
    pub stop_name: Option<String>,
    pub stop_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub street_name: Option<String>,
}

impl fmt::Display for UnresolvedStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Code: {} | Location: ({}, {}) | Street: {}",
            self.stop_name.as_deref().unwrap_or("-"),
            self.stop_code.as_deref().unwrap_or("-"),
            self.latitude,
            self.longitude,
            self.street_name.as_deref().unwrap_or("-"),
        )
    }
}

/// A general registry row without a stop id. It has no place in the stop
/// table; its route link keeps a null stop id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingStopId {
    pub route_number: String,
    pub stop_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub street_name: Option<String>,
}

impl fmt::Display for MissingStopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route {} | Name: {} | Location: ({}, {}) | Street: {}",
            self.route_number,
            self.stop_name.as_deref().unwrap_or("-"),
            self.latitude,
            self.longitude,
            self.street_name.as_deref().unwrap_or("-"),
        )
    }
}

/// A route link left without a stop id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedLink {
    pub route_number: String,
    pub direction: Direction,
    pub zone: String,
}

impl fmt::Display for UnresolvedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route {}, Direction {}, Zone {}",
            self.route_number, self.direction, self.zone
        )
    }
}

/// Several source stops that ended up with the same canonical id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateStopId {
    pub stop_id: String,
    pub occurrences: usize,
}

impl fmt::Display for DuplicateStopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stop id {} assigned to {} stops",
            self.stop_id, self.occurrences
        )
    }
}

/// Counts and advisory listings for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// General registry rows read.
    pub source_rows: usize,
    /// Rows dropped because their route matched the excluded-route marker.
    pub excluded_rows: usize,
    /// Stops whose id came from an authority registry.
    pub resolved_stops: usize,
    /// Stops whose id was already native.
    pub native_stops: usize,
    /// Route links removed as duplicates.
    pub duplicate_links: usize,
    pub unresolved_stops: Vec<UnresolvedStop>,
    /// General registry rows that carry no stop id.
    pub missing_stop_ids: Vec<MissingStopId>,
    pub unresolved_links: Vec<UnresolvedLink>,
    pub duplicate_stop_ids: Vec<DuplicateStopId>,
}

impl Diagnostics {
    /// Whether any advisory listing is non-empty.
    pub fn has_findings(&self) -> bool {
        !self.unresolved_stops.is_empty()
            || !self.missing_stop_ids.is_empty()
            || !self.unresolved_links.is_empty()
            || !self.duplicate_stop_ids.is_empty()
    }
}
