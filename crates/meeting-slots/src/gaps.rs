//! Enumerate the free gaps around a reduced busy list.
//!
//! Candidates are the span before the first busy interval, the span between
//! each consecutive pair, and the span after the last one up to the end of the
//! day. A candidate is kept when it is at least `duration` minutes long.

use tracing::trace;

use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Free gaps of at least `duration` minutes around `busy`.
///
/// `busy` must be sorted ascending by end time with nested intervals already
/// removed (see [`crate::reduce`]). Overlapping neighbours are tolerated: the
/// inverted span between them is skipped rather than reported.
///
/// Gaps come back in the order they are found, each at most once. An empty
/// busy list yields no gaps; callers treat that case as a free day.
pub fn enumerate_gaps(busy: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut slots: Vec<TimeRange> = Vec::new();

    for (index, current) in busy.iter().enumerate() {
        if index == 0 {
            offer(&mut slots, START_OF_DAY, current.start(), duration);
        }
        if let Some(next) = busy.get(index + 1) {
            offer(&mut slots, current.end(), next.start(), duration);
        }
        if index + 1 == busy.len() && current.end() < END_OF_DAY {
            offer(&mut slots, current.end(), END_OF_DAY, duration);
        }
    }

    slots
}

fn offer(slots: &mut Vec<TimeRange>, start: u32, end: u32, duration: u32) {
    if start > end || end - start < duration {
        return;
    }
    let gap = TimeRange::new_unchecked(start, end);
    if !slots.contains(&gap) {
        trace!(%gap, "accepted gap");
        slots.push(gap);
    }
}
