//! # Source Adapters
//!
//! A [`SourceAdapter`] turns one raw record of a specific source format into
//! canonical field values. Adapters are picked by an explicit
//! [`SourceFormat`] tag; the interval extractor only ever talks to the trait,
//! so a new format is a new implementation and nothing else.
//!
//! - `json` - StatsBomb-style JSON event arrays ([`JsonEventAdapter`])

pub mod json;

use std::fmt;
use std::path::Path;

pub use json::{JsonEventAdapter, JsonRecord};

/// Auxiliary per-category fields scanned when synthesizing a description,
/// in scan order.
pub const DETAIL_FIELDS: [&str; 8] = [
    "goalkeeper",
    "pass",
    "dribble",
    "shot",
    "bad_behaviour",
    "interception",
    "ball_receipt",
    "duel",
];

/// Prefix of every synthesized description.
pub const DESCRIPTION_LABEL: &str = "Additional Informations: ";

/// Supported source formats, identified by their tag (file extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Json,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 1] = [SourceFormat::Json];

    pub fn tag(&self) -> &'static str {
        match self {
            SourceFormat::Json => "json",
        }
    }

    /// Exact tag match; `"JSON"` is not `"json"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|format| format.tag() == tag)
    }

    /// Format named by the path's extension, if any and if supported.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_tag)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A required field could not be read from a record.
///
/// Carries the field path only; the caller knows the record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field '{}'", self.0)
    }
}

impl std::error::Error for MissingField {}

/// Field-extraction capability for one source format.
pub trait SourceAdapter {
    /// One raw record as decoded from the source.
    type Record;

    /// Format this adapter reads.
    fn format(&self) -> SourceFormat;

    /// Decode a whole source into its ordered record collection.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Self::Record>, String>;

    fn extract_player(&self, record: &Self::Record) -> Option<String>;

    /// Human-readable summary built from the record's detail fields.
    /// Never absent; a record without details yields the bare label.
    fn extract_description(&self, record: &Self::Record) -> String;

    /// `(x, y)`; both present or both absent.
    fn extract_location(&self, record: &Self::Record) -> (Option<f64>, Option<f64>);

    fn extract_timestamp(&self, record: &Self::Record) -> Result<String, MissingField>;

    fn extract_event_type(&self, record: &Self::Record) -> Result<String, MissingField>;

    fn extract_team(&self, record: &Self::Record) -> Result<String, MissingField>;
}

/// Render accumulated `(key, value)` details as a description.
pub fn render_description(details: &[(String, String)]) -> String {
    let listing = details
        .iter()
        .map(|(key, value)| format!("({}: {})", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}{}", DESCRIPTION_LABEL, listing)
}
