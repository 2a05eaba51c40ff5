//! Writers for the stop and route-link tables.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use serde::Serialize;
use stopsync_model::{RouteLink, StopRecord};
use tracing::info;

use crate::error::{OutputError, Result};

/// File name of the stops table.
pub const STOPS_CSV: &str = "stops.csv";

/// File name of the route-link table.
pub const ROUTE_LINKS_CSV: &str = "services.csv";

/// File name of the JSON stop export.
pub const STOPS_JSON: &str = "stops.json";

/// Column order of the stops table.
pub const STOP_COLUMNS: &[&str] = &[
    "stop_id",
    "stop_code",
    "stop_name",
    "street_name",
    "latitude",
    "longitude",
];

/// Column order of the route-link table.
pub const ROUTE_LINK_COLUMNS: &[&str] =
    &["route_number", "stop_id", "direction", "zone", "sequence"];

/// Paths written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub stops: PathBuf,
    pub route_links: PathBuf,
    pub stops_json: Option<PathBuf>,
}

/// Write both tables, and the JSON stop export when `json` is set, into
/// `output_dir`. The directory is created if missing.
pub fn write_outputs(
    output_dir: &Path,
    stops: &[StopRecord],
    route_links: &[RouteLink],
    json: bool,
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let stops_path = output_dir.join(STOPS_CSV);
    write_stops_csv(&stops_path, stops)?;
    let links_path = output_dir.join(ROUTE_LINKS_CSV);
    write_route_links_csv(&links_path, route_links)?;
    let json_path = if json {
        let path = output_dir.join(STOPS_JSON);
        write_stops_json(&path, stops)?;
        Some(path)
    } else {
        None
    };

    Ok(OutputPaths {
        stops: stops_path,
        route_links: links_path,
        stops_json: json_path,
    })
}

/// Write the stops table with [`STOP_COLUMNS`].
pub fn write_stops_csv(path: &Path, stops: &[StopRecord]) -> Result<()> {
    write_csv(path, STOP_COLUMNS, stops)
}

/// Write the route-link table with [`ROUTE_LINK_COLUMNS`].
pub fn write_route_links_csv(path: &Path, links: &[RouteLink]) -> Result<()> {
    write_csv(path, ROUTE_LINK_COLUMNS, links)
}

/// Write the stops as a compact JSON array.
pub fn write_stops_json(path: &Path, stops: &[StopRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, stops).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| OutputError::io(path, e))?;
    info!(path = %path.display(), rows = stops.len(), "wrote JSON");
    Ok(())
}

/// The header is written explicitly so an empty table still has one.
fn write_csv<T: Serialize>(path: &Path, columns: &[&str], rows: &[T]) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| OutputError::io(path, e))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    writer
        .write_record(columns)
        .map_err(|e| OutputError::csv(path, &e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| OutputError::csv(path, &e))?;
    }
    writer.flush().map_err(|e| OutputError::io(path, e))?;
    info!(path = %path.display(), rows = rows.len(), "wrote CSV");
    Ok(())
}

/// Ensure a parent directory exists for a file path.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
