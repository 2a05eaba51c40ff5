use std::path::PathBuf;

/// Errors raised while loading or compiling rule tables.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("failed to read rules file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rules file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid stop code prefix '{prefix}': {message}")]
    InvalidPrefix { prefix: String, message: String },

    #[error("invalid street type '{key}': {message}")]
    InvalidStreetType { key: String, message: String },

    #[error("failed to compile stop code pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
