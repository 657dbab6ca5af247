//! Collect the busy intervals of a group of attendees.
//!
//! Every event an attendee is listed on contributes its `when` range. Nothing is
//! de-duplicated here: two attendees sharing one event yield the range twice,
//! and the reducer folds the copies together later.

use crate::event::Event;
use crate::time_range::TimeRange;

/// Busy intervals for `attendees` across `events`, in attendee-then-event order.
///
/// Attendees listed on no event contribute nothing.
pub fn busy_intervals<'a, A>(events: &[Event], attendees: A) -> Vec<TimeRange>
where
    A: IntoIterator<Item = &'a str>,
{
    attendees
        .into_iter()
        .flat_map(move |attendee| {
            events
                .iter()
                .filter(move |event| event.has_attendee(attendee))
                .map(Event::when)
        })
        .collect()
}
