use crate::event::{Conflicts, Event};
use crate::meeting::MeetingRequest;
use crate::time::{AvailableSlots, TimeRange, END_OF_DAY};
use itertools::Itertools;
use log::{debug, trace};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::iter;

/// Answers meeting requests against one day's worth of events.
#[derive(Deserialize, Debug)]
pub struct MeetingQuery {
    pub events: Vec<Event>,
}

impl MeetingQuery {
    pub fn new(events: Vec<Event>) -> MeetingQuery {
        MeetingQuery { events }
    }

    /// Every maximal range of the day during which all required
    /// attendees are free for at least `request.duration` minutes,
    /// ordered by start. Slots that also fit at least one optional
    /// attendee are preferred whenever any exist; when the request
    /// names no required attendees at all, the optional attendees
    /// alone define the answer.
    ///
    /// An empty result is not an error: it means no slot satisfies
    /// the request.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::event::Event;
    /// use terminfinder::meeting::MeetingRequest;
    /// use terminfinder::query::MeetingQuery;
    /// use terminfinder::time::TimeRange;
    /// use std::collections::HashSet;
    ///
    /// let events = vec![Event::new(
    ///     "standup",
    ///     TimeRange::new(60, 120),
    ///     vec!["ana".to_string()].into_iter().collect(),
    /// )];
    ///
    /// let request = MeetingRequest::new(
    ///     vec!["ana".to_string()].into_iter().collect(),
    ///     HashSet::new(),
    ///     30,
    /// );
    ///
    /// let query = MeetingQuery::new(events);
    /// assert_eq!(
    ///     query.query(&request),
    ///     vec![TimeRange::new(0, 60), TimeRange::new(120, 1440)]
    /// );
    /// ```
    pub fn query(&self, request: &MeetingRequest) -> Vec<TimeRange> {
        if request.duration > END_OF_DAY {
            debug!(
                "requested duration {} cannot fit within one day",
                request.duration
            );
            return Vec::new();
        }

        let required_free = self.free_slots(&request.required_attendees, request.duration);
        trace!(
            "{} candidate slot(s) free for all required attendees",
            required_free.len()
        );

        // Each optional attendee is considered individually: their own free
        // slots are intersected with the required slots, and every overlap
        // still long enough for the meeting is kept.
        let optional_free: BTreeSet<TimeRange> = request
            .optional_attendees
            .iter()
            .flat_map(|attendee| {
                let own = iter::once(attendee.clone()).collect::<HashSet<String>>();
                let own_free = self.free_slots(&own, request.duration);

                own_free
                    .iter()
                    .cartesian_product(required_free.iter())
                    .filter(|&(&own_slot, &required_slot)| own_slot.overlaps(required_slot))
                    .map(|(&own_slot, &required_slot)| {
                        TimeRange::new(
                            own_slot.start().max(required_slot.start()),
                            own_slot.end().min(required_slot.end()),
                        )
                    })
                    .filter(|overlap| overlap.duration() >= request.duration)
                    .collect::<Vec<_>>()
            })
            .collect();

        if request.required_attendees.is_empty() && !request.optional_attendees.is_empty() {
            // No required attendees: the optional intersection is the whole
            // answer, even when it is empty.
            debug!(
                "optional-only request resolved to {} slot(s)",
                optional_free.len()
            );
            return optional_free.into_iter().collect();
        }

        if !optional_free.is_empty() {
            debug!(
                "{} slot(s) also accommodate at least one optional attendee",
                optional_free.len()
            );
            optional_free.into_iter().collect()
        } else {
            debug!("no slot fits any optional attendee, answering for required only");
            required_free.into_iter().collect()
        }
    }

    /// Free slots of at least `min_duration` minutes for one attendee
    /// group. A group with no conflicting events is free the whole day.
    fn free_slots(&self, attendees: &HashSet<String>, min_duration: u16) -> BTreeSet<TimeRange> {
        let conflicts = self.events.iter().conflicts(attendees);

        if conflicts.is_empty() {
            return iter::once(TimeRange::WHOLE_DAY).collect();
        }

        conflicts.iter().available_slots(min_duration)
    }
}
