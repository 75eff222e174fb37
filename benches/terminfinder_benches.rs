use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use terminfinder::event::Event;
use terminfinder::input::Input;
use terminfinder::meeting::MeetingRequest;
use terminfinder::query::MeetingQuery;
use terminfinder::time::TimeRange;

fn attendee(id: u16) -> HashSet<String> {
    vec![id.to_string()].into_iter().collect()
}

fn day_of_events() -> Vec<Event> {
    // Eight people, each busy for the first 25 minutes of every
    // eighth hour, so blocks overlap across attendee groups.
    (0..24u16)
        .map(|hour| {
            Event::new(
                &format!("block {}", hour),
                TimeRange::from_start_duration(hour * 60, 25),
                attendee(hour % 8),
            )
        })
        .collect()
}

fn find_meeting_times(c: &mut Criterion) {
    c.bench_function("validate", |b| {
        let input = Input::new(
            day_of_events(),
            MeetingRequest::new(attendee(0), HashSet::new(), 30),
        );

        b.iter(|| black_box(input.validate()));
    });

    c.bench_function("query_required_only", |b| {
        let query = MeetingQuery::new(day_of_events());
        let request = MeetingRequest::new(
            vec!["0".to_string(), "1".to_string(), "2".to_string()]
                .into_iter()
                .collect(),
            HashSet::new(),
            30,
        );

        b.iter(|| black_box(query.query(&request)));
    });

    c.bench_function("query_with_optionals", |b| {
        let query = MeetingQuery::new(day_of_events());
        let request = MeetingRequest::new(
            vec!["0".to_string(), "1".to_string()].into_iter().collect(),
            vec!["2".to_string(), "3".to_string(), "4".to_string()]
                .into_iter()
                .collect(),
            30,
        );

        b.iter(|| black_box(query.query(&request)));
    });

    c.bench_function("find_times", |b| {
        let input = Input::new(
            day_of_events(),
            MeetingRequest::new(attendee(0), attendee(1), 45),
        );

        b.iter(|| black_box(input.find_times()));
    });
}

criterion_group!(benches, find_meeting_times);
criterion_main!(benches);
