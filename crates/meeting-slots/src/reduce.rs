//! Reduce raw busy intervals to the windows that actually bound free time.
//!
//! The default policy, [`BusyReduction::PruneNested`], only drops intervals that
//! sit inside another interval. Overlapping intervals that are not nested both
//! survive, and the gap enumerator skips the negative "gap" between them.
//! [`BusyReduction::Merge`] collapses overlapping intervals into one span instead.
//!
//! Both policies yield the same free slots. After pruning, survivors are
//! strictly increasing in both start and end, so the gap between two
//! consecutive survivors is exactly the free time between them, and an
//! overlapping pair produces no gap at all. They differ only in the busy list
//! itself, which is what `meetslots busy` prints.

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// How overlapping busy intervals are reduced before gap enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusyReduction {
    /// Remove nested intervals; keep overlapping ones as they are.
    #[default]
    PruneNested,
    /// Merge every group of overlapping intervals into a single span.
    Merge,
}

/// Apply `reduction` to a raw busy list.
///
/// The result is sorted ascending by end time and never contains empty ranges.
pub fn reduce_busy(busy: Vec<TimeRange>, reduction: BusyReduction) -> Vec<TimeRange> {
    match reduction {
        BusyReduction::PruneNested => prune_nested(busy),
        BusyReduction::Merge => merge_overlapping(busy),
    }
}

/// Drop every interval contained in another interval of the list.
///
/// Exact duplicates collapse to a single copy. Empty ranges block no minute and
/// are discarded up front. Survivors come back in ascending end order, which
/// for a nesting-free list is also ascending start order.
pub fn prune_nested(busy: Vec<TimeRange>) -> Vec<TimeRange> {
    let mut intervals: Vec<TimeRange> = busy.into_iter().filter(|r| !r.is_empty()).collect();

    // Widest range first among equal starts, so anything it covers follows it.
    intervals.sort_by(|a, b| a.start().cmp(&b.start()).then(b.end().cmp(&a.end())));

    let mut survivors: Vec<TimeRange> = Vec::with_capacity(intervals.len());
    for range in intervals {
        // The last survivor has the furthest end seen so far.
        if let Some(last) = survivors.last() {
            if last.contains(&range) {
                continue;
            }
        }
        survivors.push(range);
    }

    survivors
}

/// Merge overlapping intervals into non-overlapping spans sorted by start.
///
/// Adjacent intervals (`a.end == b.start`) stay separate so the zero-length
/// boundary between them is still reported, matching [`prune_nested`].
pub fn merge_overlapping(busy: Vec<TimeRange>) -> Vec<TimeRange> {
    let mut intervals: Vec<TimeRange> = busy.into_iter().filter(|r| !r.is_empty()).collect();
    intervals.sort_by(TimeRange::cmp_by_start);

    let mut merged: Vec<TimeRange> = Vec::with_capacity(intervals.len());
    for range in intervals {
        if let Some(last) = merged.last_mut() {
            if range.start() < last.end() {
                *last = TimeRange::new_unchecked(last.start(), last.end().max(range.end()));
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
