//! Calendar events and meeting requests.
//!
//! Both are immutable value records. Attendees are opaque identifiers (usually
//! email addresses) held in ordered sets, so membership is all that matters:
//! listing someone twice, or as both mandatory and optional, changes nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An already-booked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    name: String,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<N, I, A>(name: N, when: TimeRange, attendees: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True iff `attendee` is listed on this event.
    pub fn has_attendee(&self, attendee: &str) -> bool {
        self.attendees.contains(attendee)
    }
}

/// A request to find room for a new meeting.
///
/// `duration` is in minutes and may exceed a whole day; such a request is
/// simply unsatisfiable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: u32,
}

impl MeetingRequest {
    /// A request for the given mandatory attendees and no optional ones.
    pub fn new<I, A>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Replace the optional attendee set.
    pub fn with_optional<I, A>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_optional_attendee(&mut self, attendee: impl Into<String>) {
        self.optional_attendees.insert(attendee.into());
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Mandatory and optional attendees together, each listed once.
    pub fn all_attendees(&self) -> BTreeSet<&str> {
        self.attendees
            .iter()
            .chain(&self.optional_attendees)
            .map(String::as_str)
            .collect()
    }
}
