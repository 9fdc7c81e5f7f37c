//! Football Commentator CLI
//!
//! Offline front end for the event pipeline: extract windows, preview the
//! generator request, walk a match tick by tick, check match metadata.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fc_core::commentary::format_events;
use fc_core::models::clock;
use fc_core::{
    tick_windows, ChatRequest, EventStore, GeneratorSettings, JsonEventAdapter, MatchClock,
    MatchInfo,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fc_cli")]
#[command(about = "Windowed match event extraction for live commentary", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the events inside a match-clock window
    Extract {
        /// Event source file (`-` reads JSON from stdin)
        #[arg(long, env = "SOURCE_EVENTS")]
        source: PathBuf,

        /// Window start, seconds of match clock
        #[arg(long, default_value_t = 0)]
        start: u32,

        /// Window end, seconds of match clock (inclusive)
        #[arg(long)]
        end: u32,

        /// Emit events as a JSON array
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Print the chat request a generator would send for a window
    Prompt {
        /// Event source file (`-` reads JSON from stdin)
        #[arg(long, env = "SOURCE_EVENTS")]
        source: PathBuf,

        #[arg(long, default_value_t = 0)]
        start: u32,

        #[arg(long)]
        end: u32,
    },

    /// Walk the match in fixed ticks and report each window
    Timeline {
        /// Event source file (`-` reads JSON from stdin)
        #[arg(long, env = "SOURCE_EVENTS")]
        source: PathBuf,

        /// Seconds between ticks
        #[arg(long, default_value_t = 20)]
        interval: u32,

        /// Last tick, seconds of match clock (defaults to the last event)
        #[arg(long)]
        until: Option<u32>,
    },

    /// Validate and print match metadata
    MatchInfo {
        /// Match metadata YAML file
        #[arg(long, env = "MATCH_METADATA_PATH")]
        metadata: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fc_cli=info,fc_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { source, start, end, json } => {
            let store = open_store(&source)?;
            let events = store
                .extract(start, end)
                .with_context(|| format!("Failed to extract window [{}, {}]", start, end))?;
            info!("{} events in [{}, {}]", events.len(), start, end);

            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if !events.is_empty() {
                println!("{}", format_events(&events));
            }
        }

        Commands::Prompt { source, start, end } => {
            let settings = GeneratorSettings::from_env().context("Invalid generator settings")?;
            let store = open_store(&source)?;
            let events = store
                .extract(start, end)
                .with_context(|| format!("Failed to extract window [{}, {}]", start, end))?;

            let request = ChatRequest::for_events(&settings, &events);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }

        Commands::Timeline { source, interval, until } => {
            let store = open_store(&source)?;
            let until = match until {
                Some(until) => until,
                None => last_event_second(&store)?,
            };
            print_timeline(&store, interval, until);
        }

        Commands::MatchInfo { metadata } => {
            let match_info = MatchInfo::load(&metadata)
                .with_context(|| format!("Failed to load match info from {}", metadata.display()))?;
            print_match_info(&match_info);
        }
    }

    Ok(())
}

fn open_store(source: &Path) -> Result<EventStore<JsonEventAdapter>> {
    let store = if source == Path::new("-") {
        EventStore::from_reader(JsonEventAdapter, io::stdin().lock())
    } else {
        EventStore::open(source, JsonEventAdapter)
    };
    store.with_context(|| format!("Failed to load events from {}", source.display()))
}

fn last_event_second(store: &EventStore<JsonEventAdapter>) -> Result<u32> {
    let events = store.events().context("Failed to normalize events")?;
    Ok(events
        .iter()
        .filter_map(|event| clock::elapsed_seconds(event.timestamp()))
        .max()
        .unwrap_or(0))
}

/// One line per tick. A failed window is reported and the walk goes on.
fn print_timeline(store: &EventStore<JsonEventAdapter>, interval: u32, until: u32) {
    for window in tick_windows(interval, until) {
        let label = MatchClock::from_elapsed(window.end());
        let span = window.to_string();
        match store.extract_window(window) {
            Ok(events) => {
                let kinds: Vec<_> = events.iter().map(|e| e.event_type()).collect();
                println!("{}  {:<12} {:>3} events  {}", label, span, events.len(), kinds.join(", "));
            }
            Err(e) => println!("{}  {:<12} skipped: {}", label, span, e),
        }
    }
}

fn print_match_info(match_info: &MatchInfo) {
    println!("{} | {}", match_info.competition.name, match_info.date);
    for team in [&match_info.home_team, &match_info.away_team] {
        println!("\n{}", team.name);
        for player in &team.lineup {
            println!("  {:>2}. {}", player.number, player.name);
        }
    }
}
