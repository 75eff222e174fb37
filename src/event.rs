use crate::time::TimeRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// A calendar entry blocking its attendees for one range of the day.
/// The name is display-only and never consulted by scheduling logic.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Event {
    pub name: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new(name: &str, when: TimeRange, attendees: HashSet<String>) -> Event {
        Event {
            name: name.to_string(),
            when,
            attendees,
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Event {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let when = u.arbitrary::<TimeRange>()?;
        let len = u.arbitrary_len::<u8>()?.min(4);
        let mut attendees = HashSet::with_capacity(len);
        for _ in 0..len {
            // A small id pool so fuzzed events actually share attendees.
            attendees.insert(u.int_in_range(0..=7u8)?.to_string());
        }
        Ok(Event {
            name: u.arbitrary::<String>()?,
            when,
            attendees,
        })
    }
}

pub trait Conflicts {
    fn conflicts(self, attendees: &HashSet<String>) -> BTreeSet<TimeRange>;
}

impl<'a, T> Conflicts for T
where
    T: Iterator<Item = &'a Event>,
{
    /// Collects the ranges of every event attended by at least one of
    /// `attendees`, deduplicated and ordered by start. Which event
    /// produced a range does not matter to the sweep, only the range.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::event::{Conflicts, Event};
    /// use terminfinder::time::TimeRange;
    /// use std::collections::{BTreeSet, HashSet};
    ///
    /// let events = vec![
    ///     Event::new(
    ///         "standup",
    ///         TimeRange::new(540, 555),
    ///         vec!["ana".to_string()].into_iter().collect(),
    ///     ),
    ///     Event::new(
    ///         "lunch",
    ///         TimeRange::new(720, 780),
    ///         vec!["ben".to_string()].into_iter().collect(),
    ///     ),
    /// ];
    ///
    /// let attendees: HashSet<String> = vec!["ana".to_string()].into_iter().collect();
    ///
    /// let conflicts = events.iter().conflicts(&attendees);
    /// assert_eq!(
    ///     conflicts,
    ///     vec![TimeRange::new(540, 555)].into_iter().collect::<BTreeSet<_>>()
    /// );
    /// ```
    fn conflicts(self, attendees: &HashSet<String>) -> BTreeSet<TimeRange> {
        self.filter(|event| !event.attendees.is_disjoint(attendees))
            .map(|event| event.when)
            .collect()
    }
}
