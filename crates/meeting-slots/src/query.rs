//! Find the slots where a requested meeting fits.
//!
//! Short-circuit rules are checked first, in this order:
//!
//! 1. No attendees at all: the whole day.
//! 2. Duration longer than a day: nothing.
//! 3. No events: the whole day.
//!
//! Otherwise the search runs in two tiers. The first tier treats mandatory and
//! optional attendees alike. If it finds no slot and the request has mandatory
//! attendees, the second tier ignores the optional ones. A non-empty first tier
//! is returned as is.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conflict::busy_intervals;
use crate::event::{Event, MeetingRequest};
use crate::gaps::enumerate_gaps;
use crate::reduce::{reduce_busy, BusyReduction};
use crate::time_range::TimeRange;

/// Behaviour knobs for [`MeetingSlotResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolverOptions {
    #[serde(default)]
    pub reduction: BusyReduction,
}

/// Which rule produced a [`QueryOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTier {
    /// The request named nobody.
    NoAttendees,
    /// The duration exceeds a whole day.
    TooLong,
    /// There were no events to conflict with.
    NoEvents,
    /// Slots free for mandatory and optional attendees alike.
    Everyone,
    /// Optional attendees were dropped to find the slots.
    MandatoryOnly,
}

/// Slots found for a request, with the rule that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub slots: Vec<TimeRange>,
    pub tier: SearchTier,
}

/// Computes candidate meeting slots from a snapshot of events.
///
/// The resolver holds no state between calls; identical inputs always produce
/// identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingSlotResolver {
    options: ResolverOptions,
}

impl MeetingSlotResolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Slots of at least `request.duration()` minutes where the meeting fits.
    ///
    /// An empty result means no slot exists, even without optional attendees.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        self.query_detailed(events, request).slots
    }

    /// Like [`query`](Self::query), also reporting which rule answered.
    pub fn query_detailed(&self, events: &[Event], request: &MeetingRequest) -> QueryOutcome {
        let duration = request.duration();

        if request.attendees().is_empty() && request.optional_attendees().is_empty() {
            debug!("no attendees requested, whole day is free");
            return QueryOutcome {
                slots: vec![TimeRange::WHOLE_DAY],
                tier: SearchTier::NoAttendees,
            };
        }

        if duration > TimeRange::WHOLE_DAY.duration() {
            debug!(duration, "requested duration exceeds a day");
            return QueryOutcome {
                slots: Vec::new(),
                tier: SearchTier::TooLong,
            };
        }

        if events.is_empty() {
            debug!("no events, whole day is free");
            return QueryOutcome {
                slots: vec![TimeRange::WHOLE_DAY],
                tier: SearchTier::NoEvents,
            };
        }

        let everyone = self.search(events, request.all_attendees(), duration);
        if !everyone.is_empty() || request.attendees().is_empty() {
            return QueryOutcome {
                slots: everyone,
                tier: SearchTier::Everyone,
            };
        }

        debug!("no slot suits optional attendees, retrying with mandatory attendees only");
        let mandatory: BTreeSet<&str> = request.attendees().iter().map(String::as_str).collect();
        QueryOutcome {
            slots: self.search(events, mandatory, duration),
            tier: SearchTier::MandatoryOnly,
        }
    }

    /// One tier: extract, reduce, enumerate.
    fn search(&self, events: &[Event], attendees: BTreeSet<&str>, duration: u32) -> Vec<TimeRange> {
        let busy = reduce_busy(
            busy_intervals(events, attendees.iter().copied()),
            self.options.reduction,
        );
        debug!(
            attendees = attendees.len(),
            busy = busy.len(),
            "reduced busy intervals"
        );

        if busy.is_empty() {
            return vec![TimeRange::WHOLE_DAY];
        }
        enumerate_gaps(&busy, duration)
    }
}

/// Slots for `request` with the default [`ResolverOptions`].
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    MeetingSlotResolver::default().query(events, request)
}
