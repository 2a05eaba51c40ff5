//! Registry CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use stopsync_model::{AuthorityRecord, GeneralStopRow};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Maximum registry file size (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Columns the general registry must provide.
pub const GENERAL_REQUIRED_COLUMNS: &[&str] = &[
    "stop_id",
    "stop_name",
    "latitude",
    "longitude",
    "route_number",
    "direction",
];

/// Columns an authority registry must provide.
pub const AUTHORITY_REQUIRED_COLUMNS: &[&str] = &["stop_id"];

/// Read the general bus-stop registry, one row per route stop.
pub fn read_general_registry(path: &Path) -> Result<Vec<GeneralStopRow>> {
    read_records(path, GENERAL_REQUIRED_COLUMNS)
}

/// Read a rapid or rail authority registry.
pub fn read_authority_registry(path: &Path) -> Result<Vec<AuthorityRecord>> {
    read_records(path, AUTHORITY_REQUIRED_COLUMNS)
}

/// Read a headed CSV file into records.
///
/// Header names and cells are trimmed, a UTF-8 BOM is dropped from the
/// header, empty cells become `None` for optional fields and unknown columns
/// are ignored.
pub fn read_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    check_file_size(path, MAX_CSV_FILE_SIZE)?;
    validate_encoding(path)?;

    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    reader.set_headers(headers);

    let mut records = Vec::new();
    for result in reader.deserialize::<T>() {
        records.push(result.map_err(|e| IngestError::csv(path, &e))?);
    }
    debug!(path = %path.display(), rows = records.len(), "registry loaded");
    Ok(records)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_lowercase()
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject UTF-16 files by their byte order mark.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    if bytes_read < 2 {
        return Ok(());
    }
    let encoding = match buffer {
        [0xFF, 0xFE] => "UTF-16 LE",
        [0xFE, 0xFF] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_case() {
        assert_eq!(normalize_header("\u{feff}Stop_ID "), "stop_id");
        assert_eq!(normalize_header(" route_number"), "route_number");
    }
}
