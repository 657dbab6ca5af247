use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meeting_slots::{BusyReduction, Event, MeetingRequest, MeetingSlotResolver, ResolverOptions, TimeRange};

/// A busy office: 40 people, each with a handful of staggered meetings.
fn synthetic_calendar() -> (Vec<Event>, MeetingRequest) {
    let people: Vec<String> = (0..40).map(|i| format!("person{i}@example.com")).collect();
    let mut events = Vec::new();
    for (i, person) in people.iter().enumerate() {
        for slot in 0..6u32 {
            let start = (i as u32 * 7 + slot * 97) % 1360;
            let when = TimeRange::from_start_duration(start, 30 + (i as u32 % 4) * 15).unwrap();
            events.push(Event::new(format!("meeting-{i}-{slot}"), when, [person.as_str()]));
        }
    }
    let request = MeetingRequest::new(people[..5].iter().cloned(), 30)
        .with_optional(people[5..12].iter().cloned());
    (events, request)
}

fn bench_query(c: &mut Criterion) {
    let (events, request) = synthetic_calendar();

    c.bench_function("query_prune_nested", |b| {
        let resolver = MeetingSlotResolver::default();
        b.iter(|| resolver.query(black_box(&events), black_box(&request)))
    });

    c.bench_function("query_merge", |b| {
        let resolver = MeetingSlotResolver::new(ResolverOptions {
            reduction: BusyReduction::Merge,
        });
        b.iter(|| resolver.query(black_box(&events), black_box(&request)))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
