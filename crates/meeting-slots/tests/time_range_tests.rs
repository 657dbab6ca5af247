//! Tests for `TimeRange` construction, comparison, and clock text.

use std::cmp::Ordering;

use meeting_slots::time_range::{format_clock, minute_of_day, parse_clock};
use meeting_slots::{SlotError, TimeRange, END_OF_DAY, START_OF_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn whole_day_spans_1440_minutes() {
    assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
    assert_eq!(TimeRange::WHOLE_DAY.start(), START_OF_DAY);
    assert_eq!(TimeRange::WHOLE_DAY.end(), END_OF_DAY);
}

#[test]
fn from_start_duration_matches_from_start_end() {
    assert_eq!(TimeRange::from_start_duration(540, 60).unwrap(), range(540, 600));
}

#[test]
fn inverted_range_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(600, 540),
        Err(SlotError::InvertedRange { start: 600, end: 540 })
    );
}

#[test]
fn range_past_end_of_day_is_rejected() {
    assert_eq!(
        TimeRange::from_start_end(1400, 1441),
        Err(SlotError::OutOfDay { start: 1400, end: 1441 })
    );
    assert!(matches!(
        TimeRange::from_start_duration(1000, 500),
        Err(SlotError::OutOfDay { .. })
    ));
    assert!(matches!(
        TimeRange::from_start_duration(10, u32::MAX),
        Err(SlotError::OutOfDay { .. })
    ));
}

#[test]
fn empty_range_is_valid() {
    let empty = range(600, 600);
    assert!(empty.is_empty());
    assert_eq!(empty.duration(), 0);
}

// ── Overlap and containment ─────────────────────────────────────────────────

#[test]
fn overlapping_ranges_overlap_both_ways() {
    let a = range(510, 570);
    let b = range(540, 600);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn adjacent_ranges_do_not_overlap() {
    let a = range(480, 540);
    let b = range(540, 600);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn empty_range_overlaps_nothing() {
    let empty = range(500, 500);
    assert!(!empty.overlaps(&TimeRange::WHOLE_DAY));
    assert!(!TimeRange::WHOLE_DAY.overlaps(&empty));
}

#[test]
fn containment() {
    let outer = range(480, 600);
    assert!(outer.contains(&range(500, 550)));
    assert!(outer.contains(&range(480, 600)));
    assert!(!outer.contains(&range(470, 550)));
    assert!(!outer.contains(&range(550, 610)));
    assert!(!range(500, 550).contains(&outer));
}

#[test]
fn point_containment_is_end_exclusive() {
    let r = range(540, 600);
    assert!(r.contains_point(540));
    assert!(r.contains_point(599));
    assert!(!r.contains_point(600));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn natural_order_is_start_then_end() {
    let mut ranges = vec![range(600, 700), range(500, 800), range(500, 600)];
    ranges.sort();
    assert_eq!(ranges, vec![range(500, 600), range(500, 800), range(600, 700)]);
}

#[test]
fn end_order_comparator() {
    assert_eq!(
        TimeRange::cmp_by_end(&range(0, 700), &range(600, 650)),
        Ordering::Greater
    );
    assert_eq!(
        TimeRange::cmp_by_start(&range(0, 700), &range(600, 650)),
        Ordering::Less
    );
}

// ── Clock text ──────────────────────────────────────────────────────────────

#[test]
fn minute_of_day_bounds() {
    assert_eq!(minute_of_day(0, 0).unwrap(), 0);
    assert_eq!(minute_of_day(9, 30).unwrap(), 570);
    assert_eq!(minute_of_day(24, 0).unwrap(), END_OF_DAY);
    assert!(minute_of_day(24, 1).is_err());
    assert!(minute_of_day(12, 60).is_err());
}

#[test]
fn parses_and_formats_clock_text() {
    assert_eq!(parse_clock("08:45").unwrap(), 525);
    assert_eq!(parse_clock("24:00").unwrap(), END_OF_DAY);
    assert!(matches!(parse_clock("noon"), Err(SlotError::InvalidClock(_))));
    assert_eq!(format_clock(525), "08:45");
    assert_eq!(format_clock(END_OF_DAY), "24:00");
}

#[test]
fn range_display_and_parse() {
    let r: TimeRange = "09:00-10:30".parse().unwrap();
    assert_eq!(r, range(540, 630));
    assert_eq!(r.to_string(), "09:00-10:30");
    assert_eq!(TimeRange::WHOLE_DAY.to_string(), "00:00-24:00");
    assert!("10:00-09:00".parse::<TimeRange>().is_err());
    assert!("10:00".parse::<TimeRange>().is_err());
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn serializes_as_start_end_pair() {
    let json = serde_json::to_string(&range(540, 600)).unwrap();
    assert_eq!(json, r#"{"start":540,"end":600}"#);
}

#[test]
fn deserialization_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":0,"end":1440}"#).unwrap();
    assert_eq!(ok, TimeRange::WHOLE_DAY);

    assert!(serde_json::from_str::<TimeRange>(r#"{"start":600,"end":540}"#).is_err());
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":0,"end":1441}"#).is_err());
    assert!(serde_json::from_str::<TimeRange>(r#"{"start":-1,"end":10}"#).is_err());
}
