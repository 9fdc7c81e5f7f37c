//! # Interval Extraction
//!
//! Normalizes raw records into [`FootballEvent`]s and keeps the ones whose
//! match-clock time falls inside a window.
//!
//! ## Algorithm
//! 1. For each raw record, in source order, read its type label
//! 2. Drop administrative records (the starting-lineup announcement)
//! 3. Build the event: location, timestamp, team, player, description
//! 4. Elapsed seconds = `60 * minutes + seconds` of the timestamp
//! 5. Keep iff `start <= elapsed <= end`
//!
//! The filter is stable and never reorders. Both window ends are inclusive,
//! so back-to-back windows `[0, 20]` and `[20, 40]` both contain an event at
//! second 20. Any malformed record fails the whole call.

use std::fmt;

use crate::adapter::{MissingField, SourceAdapter};
use crate::error::{IngestError, Result};
use crate::models::clock;
use crate::models::event::{FootballEvent, STARTING_XI};

/// Closed interval of elapsed match seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    start: u32,
    end: u32,
}

impl Window {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if end < start {
            return Err(IngestError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Inclusive on both ends.
    pub fn contains(&self, elapsed_seconds: u32) -> bool {
        self.start <= elapsed_seconds && elapsed_seconds <= self.end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Records of this type announce rather than happen; they never become events.
pub fn is_administrative(event_type: &str) -> bool {
    event_type == STARTING_XI
}

/// Normalize one raw record.
///
/// Returns `Ok(None)` for administrative records. `index` is the record's
/// position in the source and is only used for error reporting.
pub fn normalize_record<A: SourceAdapter>(
    adapter: &A,
    record: &A::Record,
    index: usize,
) -> Result<Option<FootballEvent>> {
    let missing = |MissingField(field): MissingField| IngestError::MalformedRecord { index, field };

    let event_type = adapter.extract_event_type(record).map_err(missing)?;
    if is_administrative(&event_type) {
        return Ok(None);
    }

    let (x, y) = adapter.extract_location(record);
    let timestamp = adapter.extract_timestamp(record).map_err(missing)?;
    let team = adapter.extract_team(record).map_err(missing)?;

    let event = FootballEvent::new(team, event_type, timestamp, adapter.extract_description(record))
        .with_player(adapter.extract_player(record))
        .with_position(x, y);
    Ok(Some(event))
}

/// Elapsed seconds of a normalized event.
fn event_seconds(event: &FootballEvent, index: usize) -> Result<u32> {
    clock::elapsed_seconds(event.timestamp()).ok_or_else(|| IngestError::InvalidTimestamp {
        index,
        value: event.timestamp().to_string(),
    })
}

/// Events from `records` inside `window`, in source order.
pub fn extract_interval<A: SourceAdapter>(
    adapter: &A,
    records: &[A::Record],
    window: Window,
) -> Result<Vec<FootballEvent>> {
    let mut kept = Vec::new();
    let mut administrative = 0usize;

    for (index, record) in records.iter().enumerate() {
        let Some(event) = normalize_record(adapter, record, index)? else {
            administrative += 1;
            continue;
        };
        if window.contains(event_seconds(&event, index)?) {
            kept.push(event);
        }
    }

    tracing::debug!(
        "Extracted {} of {} records for window {} ({} administrative)",
        kept.len(),
        records.len(),
        window,
        administrative
    );
    Ok(kept)
}

/// Every event the records can produce, regardless of time.
pub fn normalize_all<A: SourceAdapter>(adapter: &A, records: &[A::Record]) -> Result<Vec<FootballEvent>> {
    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if let Some(event) = normalize_record(adapter, record, index)? {
            event_seconds(&event, index)?;
            events.push(event);
        }
    }
    Ok(events)
}

/// Windows issued by a caller that ticks every `interval` seconds until
/// `until`: `[0, i]`, `[i, 2i]`, ..., with the last window clipped to `until`.
///
/// Consecutive windows share their boundary second.
pub fn tick_windows(interval: u32, until: u32) -> TickWindows {
    TickWindows { next_start: 0, interval, until }
}

#[derive(Debug, Clone)]
pub struct TickWindows {
    next_start: u32,
    interval: u32,
    until: u32,
}

impl Iterator for TickWindows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.interval == 0 || self.next_start >= self.until {
            return None;
        }
        let start = self.next_start;
        let end = start.saturating_add(self.interval).min(self.until);
        self.next_start = end;
        Some(Window { start, end })
    }
}
