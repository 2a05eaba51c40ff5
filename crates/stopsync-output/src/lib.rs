//! Output writers for reconciled stop data.
//!
//! The stops and route-link tables are written as CSV with the column order
//! of their records; a missing value is an empty cell. Stops can also be
//! exported as a JSON array.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    OutputPaths, ROUTE_LINK_COLUMNS, ROUTE_LINKS_CSV, STOP_COLUMNS, STOPS_CSV, STOPS_JSON,
    write_outputs, write_route_links_csv, write_stops_csv, write_stops_json,
};
