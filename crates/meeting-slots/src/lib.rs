//! # meeting-slots
//!
//! Find every slot in a single day where a new meeting fits around the events
//! its attendees have already booked.
//!
//! Times are minutes of the day, `0..=1440`, held in half-open [`TimeRange`]s.
//! A [`MeetingRequest`] names mandatory and optional attendees plus a duration.
//! The resolver first looks for slots that suit everyone; if there are none, it
//! settles for slots that suit the mandatory attendees alone.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_slots::{query, Event, MeetingRequest, TimeRange};
//!
//! let standup = Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(540, 600).unwrap(),
//!     ["alice@example.com"],
//! );
//! let request = MeetingRequest::new(["alice@example.com"], 30);
//!
//! let slots = query(&[standup], &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(0, 540).unwrap(),
//!         TimeRange::from_start_end(600, 1440).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — `[start, end)` minute ranges, day constants, clock text
//! - [`event`] — `Event` and `MeetingRequest` records
//! - [`conflict`] — Busy intervals for a set of attendees
//! - [`reduce`] — Nested-interval pruning and overlap merging
//! - [`gaps`] — Free gaps around a reduced busy list
//! - [`query`](mod@query) — Two-tier slot search (`MeetingSlotResolver`)
//! - [`error`] — Error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod gaps;
pub mod query;
pub mod reduce;
pub mod time_range;

pub use conflict::busy_intervals;
pub use error::SlotError;
pub use event::{Event, MeetingRequest};
pub use gaps::enumerate_gaps;
pub use query::{query, MeetingSlotResolver, QueryOutcome, ResolverOptions, SearchTier};
pub use reduce::{merge_overlapping, prune_nested, reduce_busy, BusyReduction};
pub use time_range::{TimeRange, END_OF_DAY, START_OF_DAY};
