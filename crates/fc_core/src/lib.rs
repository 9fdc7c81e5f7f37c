//! # fc_core - Match Event Pipeline for Live Commentary
//!
//! Normalizes logged match events into a uniform model and extracts the ones
//! that fall inside a match-clock window, ready to be handed to a commentary
//! generator.
//!
//! ## Flow
//! 1. Open an [`EventStore`] bound to a [`SourceAdapter`] (format picked by tag)
//! 2. Call [`EventStore::extract`] with a `[start, end]` window in seconds
//! 3. Pass the returned [`FootballEvent`]s to a [`CommentaryGenerator`]
//!
//! ```no_run
//! use fc_core::{EventStore, JsonEventAdapter};
//!
//! let store = EventStore::open("data/3775648.json", JsonEventAdapter)?;
//! for event in store.extract(0, 20)? {
//!     println!("{}", event);
//! }
//! # Ok::<(), fc_core::IngestError>(())
//! ```

pub mod adapter;
pub mod commentary;
pub mod config;
pub mod error;
pub mod interval;
pub mod models;
pub mod store;

pub use adapter::{JsonEventAdapter, JsonRecord, SourceAdapter, SourceFormat, DETAIL_FIELDS};
pub use commentary::{
    ChatRequest, CommentaryEntry, CommentaryError, CommentaryFeed, CommentaryGenerator, TickOutcome,
};
pub use config::GeneratorSettings;
pub use error::{ConfigError, IngestError, MatchInfoError, Result};
pub use interval::{extract_interval, normalize_record, tick_windows, Window};
pub use models::{FootballEvent, KnownEventType, MatchClock, MatchInfo};
pub use store::EventStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
