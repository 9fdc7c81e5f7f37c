use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::adapter::{SourceAdapter, SourceFormat};
use crate::error::{IngestError, Result};
use crate::interval::{self, Window};
use crate::models::event::FootballEvent;

/// Label used in errors for sources that are not files.
const STREAM_SOURCE: &str = "<stream>";

/// Raw records of one source, bound to the adapter that reads them.
///
/// Records are kept in source order and are never modified; extraction only
/// borrows them.
pub struct EventStore<A: SourceAdapter> {
    adapter: A,
    records: Vec<A::Record>,
    source: Option<PathBuf>,
}

impl<A: SourceAdapter> EventStore<A> {
    /// Load a file-backed source.
    ///
    /// The file's extension must be the tag of the adapter's format;
    /// anything else is [`IngestError::UnsupportedFormat`]. Unreadable or
    /// undecodable content is [`IngestError::SourceLoad`].
    pub fn open(path: impl AsRef<Path>, adapter: A) -> Result<Self> {
        let path = path.as_ref();
        let records = read_records(path, &adapter)?;
        Ok(Self { adapter, records, source: Some(path.to_path_buf()) })
    }

    /// Decode a source from any reader, e.g. stdin.
    pub fn from_reader(adapter: A, mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| IngestError::source_load(STREAM_SOURCE, e))?;
        let records =
            adapter.decode(&bytes).map_err(|reason| IngestError::source_load(STREAM_SOURCE, reason))?;
        tracing::info!("Loaded {} {} records from stream", records.len(), adapter.format());
        Ok(Self { adapter, records, source: None })
    }

    pub fn from_records(adapter: A, records: Vec<A::Record>) -> Self {
        Self { adapter, records, source: None }
    }

    /// Re-read a file-backed source. In-memory stores are left unchanged.
    ///
    /// On failure the previously loaded records are kept.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.source {
            self.records = read_records(path, &self.adapter)?;
        }
        Ok(())
    }

    /// Events between `start` and `end` seconds of match clock, inclusive.
    pub fn extract(&self, start: u32, end: u32) -> Result<Vec<FootballEvent>> {
        self.extract_window(Window::new(start, end)?)
    }

    pub fn extract_window(&self, window: Window) -> Result<Vec<FootballEvent>> {
        interval::extract_interval(&self.adapter, &self.records, window)
    }

    /// Every event this source can produce.
    pub fn events(&self) -> Result<Vec<FootballEvent>> {
        interval::normalize_all(&self.adapter, &self.records)
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn records(&self) -> &[A::Record] {
        &self.records
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn check_format(path: &Path, expected: SourceFormat) -> Result<()> {
    match SourceFormat::from_path(path) {
        Some(format) if format == expected => Ok(()),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            tag: path.extension().map(|ext| ext.to_string_lossy().into_owned()).unwrap_or_default(),
        }),
    }
}

fn read_records<A: SourceAdapter>(path: &Path, adapter: &A) -> Result<Vec<A::Record>> {
    check_format(path, adapter.format())?;

    let bytes = fs::read(path).map_err(|e| IngestError::source_load(path, e))?;
    let records = adapter.decode(&bytes).map_err(|reason| IngestError::source_load(path, reason))?;

    tracing::info!("Loaded {} {} records from {}", records.len(), adapter.format(), path.display());
    Ok(records)
}
