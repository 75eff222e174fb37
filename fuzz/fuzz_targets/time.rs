#![no_main]
use libfuzzer_sys::fuzz_target;
use terminfinder::time::{AvailableSlots, TimeMerge, TimeRange};

fuzz_target!(|data: (Vec<TimeRange>, u16)| {
    let (mut conflicts, min_duration) = data;
    conflicts.sort_unstable();

    let slots: Vec<TimeRange> = conflicts
        .iter()
        .available_slots(min_duration)
        .into_iter()
        .collect();

    assert!(
        slots.iter().all(|slot| slot.duration() >= min_duration),
        "Every slot should be at least the requested duration"
    );

    assert!(
        slots.windows(2).all(|pair| pair[0].end() <= pair[1].start()),
        "Slots should be sorted and disjoint"
    );

    assert!(
        slots
            .iter()
            .all(|slot| conflicts.iter().all(|&conflict| !slot.overlaps(conflict))),
        "No slot should overlap a conflict"
    );

    let merged = conflicts.iter().time_merge();

    assert!(
        merged.windows(2).all(|pair| pair[0].end() < pair[1].start()),
        "Merged ranges should be disjoint and non-adjacent"
    );

    assert!(
        conflicts.iter().all(|conflict| merged
            .iter()
            .any(|block| block.start() <= conflict.start() && conflict.end() <= block.end())),
        "Each conflict should be contained in a merged block"
    );
});
