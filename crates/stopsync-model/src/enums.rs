//! Enumerations shared by the registry tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Travel direction of a route link.
///
/// The general registry encodes direction as `0` / `1`. Any other token is
/// kept verbatim so that it is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Direction {
    /// Direction `0`.
    Outbound,
    /// Direction `1`.
    Inbound,
    /// Any other source token.
    Other(String),
}

impl Direction {
    /// Parse a raw direction cell.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "0" => Self::Outbound,
            "1" => Self::Inbound,
            other => Self::Other(other.to_string()),
        }
    }

    /// Source token for this direction.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Outbound => "0",
            Self::Inbound => "1",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Route classification used by identity resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RouteClass {
    /// Route designated as a rail feeder; rail ids take priority.
    Feeder,
    /// Any other route; rapid ids take priority.
    #[default]
    Regular,
}

impl RouteClass {
    pub fn is_feeder(self) -> bool {
        matches!(self, Self::Feeder)
    }
}

/// The authority registry that issued a canonical identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Authority {
    /// Rapid-transit stop registry.
    Rapid,
    /// Rail/MRT stop registry.
    Rail,
}

impl Authority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rapid => "rapid",
            Self::Rail => "rail",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
