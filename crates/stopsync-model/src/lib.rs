//! Data model for transit stop reconciliation.
//!
//! Rows of the three source registries, the canonical stop and route-link
//! tables, run options and advisory diagnostics.

pub mod diagnostics;
pub mod enums;
pub mod options;
pub mod records;

pub use diagnostics::{
    Diagnostics, DuplicateStopId, MissingStopId, UnresolvedLink, UnresolvedStop,
};
pub use enums::{Authority, Direction, RouteClass};
pub use options::{
    DEFAULT_EXCLUDED_ROUTE_MARKER, DEFAULT_NATIVE_ID_PREFIX, NameNormalizationMode,
    ProcessingOptions,
};
pub use records::{AuthorityRecord, GeneralStopRow, RouteLink, StopRecord};
