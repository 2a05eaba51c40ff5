//! Registry ingestion for transit stop reconciliation.
//!
//! Reads the general bus-stop registry and the rapid and rail authority
//! registries from headed CSV files into [`stopsync_model`] records. A
//! missing file is the only condition that aborts a run before processing
//! starts; malformed rows are reported with their file and position.

mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    AUTHORITY_REQUIRED_COLUMNS, GENERAL_REQUIRED_COLUMNS, MAX_CSV_FILE_SIZE, check_file_size,
    read_authority_registry, read_general_registry, read_records, validate_encoding,
};
