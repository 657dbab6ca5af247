//! Error types for meeting-slots operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A range whose start lies after its end.
    #[error("Inverted time range: start {start} is after end {end}")]
    InvertedRange { start: u32, end: u32 },

    /// A range that runs past the end of the day (minute 1440).
    #[error("Time range {start}..{end} extends beyond the end of the day")]
    OutOfDay { start: u32, end: u32 },

    /// Clock text that is not `HH:MM` or `HH:MM-HH:MM`.
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
