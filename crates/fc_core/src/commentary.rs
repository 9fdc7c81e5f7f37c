//! # Commentary
//!
//! The seam between extracted events and the text generator.
//!
//! - prompt templates and event formatting
//! - [`ChatRequest`], the chat-completion payload a generator would send
//! - [`CommentaryGenerator`], the opaque generator contract
//! - [`CommentaryFeed`], a periodic caller that turns successive windows into
//!   commentary lines and survives failed ticks

use serde::Serialize;
use thiserror::Error;

use crate::adapter::SourceAdapter;
use crate::config::GeneratorSettings;
use crate::interval::{tick_windows, Window};
use crate::models::clock::MatchClock;
use crate::models::event::FootballEvent;
use crate::store::EventStore;

pub const SYSTEM_PROMPT: &str = "You are a professional football commentator. \
You provide concise, engaging, and insightful live commentary on football matches.";

/// `{list_events}` is replaced by [`format_events`].
pub const USER_PROMPT_TEMPLATE: &str = "Given the following match events:\n\n\
{list_events}\n\n\
generate a concise commentary focused on the most important play. \
Limit your response to two detailed sentences that capture \
the key moment in a natural, dynamic tone.";

/// Text of the entry that opens every feed.
pub const KICK_OFF_TEXT: &str = "Kick Off";

/// One event per paragraph.
pub fn format_events(events: &[FootballEvent]) -> String {
    events.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n\n")
}

pub fn render_user_prompt(events: &[FootballEvent]) -> String {
    USER_PROMPT_TEMPLATE.replace("{list_events}", &format_events(events))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn for_events(settings: &GeneratorSettings, events: &[FootballEvent]) -> Self {
        Self {
            model: settings.model.clone(),
            temperature: settings.temperature,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT.to_string() },
                ChatMessage { role: "user", content: render_user_prompt(events) },
            ],
        }
    }
}

#[derive(Error, Debug)]
pub enum CommentaryError {
    #[error("Generator failed: {0}")]
    Generator(String),

    #[error("Generator returned an empty commentary")]
    Empty,
}

/// Turns an ordered list of events into one piece of commentary.
///
/// Implementations receive a shared slice and cannot alter the events.
pub trait CommentaryGenerator {
    fn generate(&self, events: &[FootballEvent]) -> Result<String, CommentaryError>;
}

impl<F> CommentaryGenerator for F
where
    F: Fn(&[FootballEvent]) -> Result<String, CommentaryError>,
{
    fn generate(&self, events: &[FootballEvent]) -> Result<String, CommentaryError> {
        self(events)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentaryEntry {
    /// Match clock at the tick, `MM'SS`.
    pub time: String,
    pub text: String,
}

impl CommentaryEntry {
    pub fn new(clock: MatchClock, text: impl Into<String>) -> Self {
        Self { time: clock.to_string(), text: text.into() }
    }
}

/// Outcome of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new entry was appended.
    Commented,
    /// Extraction or generation failed; the window was skipped.
    Skipped,
    /// The tick is not after the previous one; nothing happened.
    Stale,
}

/// Periodic caller over one store.
///
/// Each tick covers `[previous tick, now]`. A failed extraction or generation
/// means no new commentary for that tick, and the next tick starts from the
/// failed tick's end.
pub struct CommentaryFeed<'a, A: SourceAdapter, G: CommentaryGenerator> {
    store: &'a EventStore<A>,
    generator: G,
    entries: Vec<CommentaryEntry>,
    last_tick: u32,
}

impl<'a, A: SourceAdapter, G: CommentaryGenerator> CommentaryFeed<'a, A, G> {
    pub fn new(store: &'a EventStore<A>, generator: G) -> Self {
        Self {
            store,
            generator,
            entries: vec![CommentaryEntry::new(MatchClock::default(), KICK_OFF_TEXT)],
            last_tick: 0,
        }
    }

    pub fn tick(&mut self, now: u32) -> TickOutcome {
        if now <= self.last_tick {
            return TickOutcome::Stale;
        }
        let Ok(window) = Window::new(self.last_tick, now) else {
            return TickOutcome::Stale;
        };
        self.last_tick = now;

        let events = match self.store.extract_window(window) {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("No commentary for window {}: {}", window, e);
                return TickOutcome::Skipped;
            }
        };

        match self.generator.generate(&events) {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("No commentary for window {}: {}", window, CommentaryError::Empty);
                TickOutcome::Skipped
            }
            Ok(text) => {
                tracing::debug!("Commented window {} from {} events", window, events.len());
                self.entries.push(CommentaryEntry::new(MatchClock::from_elapsed(now), text));
                TickOutcome::Commented
            }
            Err(e) => {
                tracing::warn!("No commentary for window {}: {}", window, e);
                TickOutcome::Skipped
            }
        }
    }

    /// Tick every `interval` seconds up to `until`. Returns the number of
    /// entries added.
    pub fn run_until(&mut self, interval: u32, until: u32) -> usize {
        let before = self.entries.len();
        for window in tick_windows(interval, until) {
            self.tick(window.end());
        }
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[CommentaryEntry] {
        &self.entries
    }

    pub fn last_tick(&self) -> u32 {
        self.last_tick
    }
}
