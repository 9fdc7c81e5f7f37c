use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a source or extracting events from it.
///
/// Every variant is fatal to the call in progress; nothing here is retried
/// internally.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported source format '{tag}' for {path}")]
    UnsupportedFormat { path: PathBuf, tag: String },

    #[error("Failed to load source {path}: {reason}")]
    SourceLoad { path: PathBuf, reason: String },

    #[error("Record {index} is missing required field '{field}'")]
    MalformedRecord { index: usize, field: &'static str },

    #[error("Record {index} has timestamp '{value}' outside the HH:MM:SS.fff layout")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Invalid window: end {end} is before start {start}")]
    InvalidWindow { start: u32, end: u32 },
}

impl IngestError {
    pub(crate) fn source_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        IngestError::SourceLoad { path: path.into(), reason: reason.to_string() }
    }

    /// Index of the offending record, for record-level errors.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            IngestError::MalformedRecord { index, .. }
            | IngestError::InvalidTimestamp { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Errors raised while loading match metadata.
#[derive(Error, Debug)]
pub enum MatchInfoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Match metadata is not valid YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid lineup for {team}: {reason}")]
    InvalidLineup { team: String, reason: String },
}

/// Errors raised while reading settings from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue { key: &'static str, value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
