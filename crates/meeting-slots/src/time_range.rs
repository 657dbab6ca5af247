//! Half-open `[start, end)` ranges over the minutes of a single day.
//!
//! A day runs from [`START_OF_DAY`] (minute 0) to [`END_OF_DAY`] (minute 1440).
//! Every [`TimeRange`] is validated on construction: `start <= end <= END_OF_DAY`.
//! Ranges can also be written and parsed as clock text, `"09:00-10:30"`, with
//! `24:00` standing for the end of the day.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// One past the last minute of the day.
pub const END_OF_DAY: u32 = 24 * 60;

/// A half-open interval `[start, end)` of minutes within one day.
///
/// Equality and ordering compare `(start, end)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

/// Unvalidated wire shape; converted through [`TimeRange::from_start_end`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: u32,
    end: u32,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = SlotError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end)
    }
}

impl TimeRange {
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Build `[start, end)`.
    ///
    /// # Errors
    /// Returns [`SlotError::InvertedRange`] if `start > end` and
    /// [`SlotError::OutOfDay`] if `end` lies past [`END_OF_DAY`].
    pub fn from_start_end(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(SlotError::InvertedRange { start, end });
        }
        if end > END_OF_DAY {
            return Err(SlotError::OutOfDay { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns [`SlotError::OutOfDay`] if the range would run past the end of the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(SlotError::OutOfDay { start, end: u32::MAX })?;
        Self::from_start_end(start, end)
    }

    /// Construct without validation. Callers guarantee `start <= end <= END_OF_DAY`.
    pub(crate) const fn new_unchecked(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Adjacent ranges (`a.end == b.start`) do not overlap, and an empty range
    /// overlaps nothing.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// True iff `other` lies entirely within this range.
    ///
    /// Every range contains itself.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True iff `minute` falls inside `[start, end)`.
    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Order by start, breaking ties by end.
    pub fn cmp_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.start.cmp(&b.start).then(a.end.cmp(&b.end))
    }

    /// Order by end, breaking ties by start.
    pub fn cmp_by_end(a: &TimeRange, b: &TimeRange) -> Ordering {
        a.end.cmp(&b.end).then(a.start.cmp(&b.start))
    }
}

/// Minutes since midnight for a wall-clock time.
///
/// `24:00` is accepted and maps to [`END_OF_DAY`].
///
/// # Errors
/// Returns [`SlotError::InvalidClock`] for hours above 24, minutes above 59, or
/// any time past `24:00`.
pub fn minute_of_day(hours: u32, minutes: u32) -> Result<u32> {
    if hours == 24 && minutes == 0 {
        return Ok(END_OF_DAY);
    }
    if hours >= 24 || minutes >= 60 {
        return Err(SlotError::InvalidClock(format!("{hours:02}:{minutes:02}")));
    }
    Ok(hours * 60 + minutes)
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_clock(text: &str) -> Result<u32> {
    let text = text.trim();
    if text == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(text, "%H:%M")
        .map_err(|_| SlotError::InvalidClock(text.to_string()))?;
    minute_of_day(time.hour(), time.minute())
}

/// Render minutes since midnight as `HH:MM`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

impl FromStr for TimeRange {
    type Err = SlotError;

    /// Parse `HH:MM-HH:MM`.
    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| SlotError::InvalidClock(s.to_string()))?;
        TimeRange::from_start_end(parse_clock(start)?, parse_clock(end)?)
    }
}

