//! `meetslots` CLI — find meeting slots in a day's calendar from the command line.
//!
//! Input is a JSON document holding the day's events and, for `query`, the
//! meeting request. Times are minutes since midnight.
//!
//! ```json
//! {
//!   "events": [
//!     { "name": "Standup", "when": { "start": 540, "end": 555 }, "attendees": ["alice"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30 }
//! }
//! ```
//!
//! ## Usage
//!
//! ```sh
//! # Slots as JSON (stdin → stdout)
//! meetslots query < day.json
//!
//! # Slots as clock text, with the rule that produced them
//! meetslots query -i day.json --format text --detailed
//!
//! # Reduced busy windows for some attendees
//! meetslots busy -i day.json --attendee alice --attendee bob --reduction merge
//!
//! # Trace the search on stderr
//! meetslots -v query -i day.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_slots::{
    busy_intervals, reduce_busy, BusyReduction, Event, MeetingRequest, MeetingSlotResolver,
    ResolverOptions, SearchTier, TimeRange,
};
use serde::Deserialize;
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "meetslots",
    version,
    about = "Find meeting slots around a day's existing events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log the search steps to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find slots where the requested meeting fits
    Query {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long, value_enum, default_value_t = Reduction::PruneNested)]
        reduction: Reduction,
        /// Also report which rule produced the slots
        #[arg(long)]
        detailed: bool,
    },
    /// Show the reduced busy windows for a set of attendees
    Busy {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(long, value_enum, default_value_t = Reduction::PruneNested)]
        reduction: Reduction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of `{start, end}` pairs
    Json,
    /// One `HH:MM-HH:MM` range per line
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum Reduction {
    /// Drop nested busy intervals, keep overlapping ones
    PruneNested,
    /// Merge overlapping busy intervals
    Merge,
}

impl From<Reduction> for BusyReduction {
    fn from(reduction: Reduction) -> Self {
        match reduction {
            Reduction::PruneNested => BusyReduction::PruneNested,
            Reduction::Merge => BusyReduction::Merge,
        }
    }
}

/// The input document: a day's events plus an optional meeting request.
#[derive(Deserialize)]
struct Calendar {
    events: Vec<Event>,
    #[serde(default)]
    request: Option<MeetingRequest>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            reduction,
            detailed,
        } => {
            let calendar = read_calendar(input.as_deref())?;
            let request = calendar
                .request
                .context("Input has no \"request\" to schedule")?;

            let resolver = MeetingSlotResolver::new(ResolverOptions {
                reduction: reduction.into(),
            });
            let outcome = resolver.query_detailed(&calendar.events, &request);
            info!(
                slots = outcome.slots.len(),
                tier = tier_name(outcome.tier),
                "query finished"
            );

            let rendered = match (format, detailed) {
                (Format::Json, false) => serde_json::to_string_pretty(&outcome.slots)?,
                (Format::Json, true) => serde_json::to_string_pretty(&outcome)?,
                (Format::Text, false) => render_text(&outcome.slots),
                (Format::Text, true) => format!(
                    "tier: {}\n{}",
                    tier_name(outcome.tier),
                    render_text(&outcome.slots)
                ),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
            format,
            reduction,
        } => {
            let calendar = read_calendar(input.as_deref())?;
            let busy = reduce_busy(
                busy_intervals(&calendar.events, attendees.iter().map(String::as_str)),
                reduction.into(),
            );
            info!(attendees = attendees.len(), busy = busy.len(), "busy windows reduced");

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&busy)?,
                Format::Text => render_text(&busy),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Install a compact stderr subscriber, honouring `RUST_LOG` when set.
fn init_logger(verbose: bool) {
    let default_directives = if verbose { "meeting_slots=debug,meetslots=info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn tier_name(tier: SearchTier) -> &'static str {
    match tier {
        SearchTier::NoAttendees => "no_attendees",
        SearchTier::TooLong => "too_long",
        SearchTier::NoEvents => "no_events",
        SearchTier::Everyone => "everyone",
        SearchTier::MandatoryOnly => "mandatory_only",
    }
}

fn render_text(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{} ({} min)\n", r, r.duration()))
        .collect()
}

fn read_calendar(path: Option<&str>) -> Result<Calendar> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse calendar JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
