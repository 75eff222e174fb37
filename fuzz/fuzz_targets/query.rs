#![no_main]
use libfuzzer_sys::fuzz_target;
use terminfinder::event::Event;
use terminfinder::meeting::MeetingRequest;
use terminfinder::query::MeetingQuery;
use terminfinder::time::END_OF_DAY;

fuzz_target!(|data: (Vec<Event>, MeetingRequest)| {
    let (events, request) = data;
    let query = MeetingQuery::new(events);

    let slots = query.query(&request);

    if request.duration > END_OF_DAY {
        assert!(
            slots.is_empty(),
            "An oversized duration can never be satisfied"
        );
        return;
    }

    assert!(
        slots.iter().all(|slot| slot.duration() >= request.duration),
        "Every slot should fit the requested duration"
    );

    assert!(
        slots.windows(2).all(|pair| pair[0].end() <= pair[1].start()),
        "Slots should be sorted and disjoint"
    );

    for slot in &slots {
        for event in query
            .events
            .iter()
            .filter(|event| !event.attendees.is_disjoint(&request.required_attendees))
        {
            assert!(
                !slot.overlaps(event.when),
                "Required attendee double-booked: {:?} overlaps {:?}",
                slot,
                event.when
            );
        }
    }

    assert_eq!(slots, query.query(&request), "Queries should be repeatable");
});
