use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// First minute of the day.
pub const START_OF_DAY: u16 = 0;

/// One minute past the last schedulable minute of the day.
/// A range ending exactly here covers the final instant of the day.
pub const END_OF_DAY: u16 = 24 * 60;

/// Half-open [start, end) time range of minutes from midnight
/// within a single day.
///
/// The one exception to the half-open convention: a range whose end
/// equals `END_OF_DAY` also covers the final instant of the day, so
/// `contains` answers true for that minute. This is a boundary policy,
/// not a separate range kind.
///
/// Ranges order by start ascending, with end as the tie-break, which
/// is the order every sorted collection of ranges in this crate uses.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct TimeRange(pub u16, pub u16);

impl TimeRange {
    /// The full day, inclusive of its final instant.
    pub const WHOLE_DAY: TimeRange = TimeRange(START_OF_DAY, END_OF_DAY);

    /// Construct a new Time Range
    /// Range is half-open on [start, end)
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    ///
    /// assert_eq!(test.0, 0);
    /// assert_eq!(test.1, 100);
    /// ```
    pub fn new(start: u16, end: u16) -> TimeRange {
        TimeRange(start, end)
    }

    /// Construct a Time Range covering `duration` minutes from `start`
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let test = TimeRange::from_start_duration(540, 30);
    ///
    /// assert_eq!(test, TimeRange::new(540, 570));
    /// ```
    pub fn from_start_duration(start: u16, duration: u16) -> TimeRange {
        TimeRange(start, start + duration)
    }

    /// Convenience function for readability
    /// Returns the start of the TimeRange
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    /// assert_eq!(test.0, test.start());
    /// ```
    pub fn start(self) -> u16 {
        self.0
    }

    /// Convenience function for readability
    /// Returns the end of the TimeRange
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    /// assert_eq!(test.1, test.end());
    /// ```
    pub fn end(self) -> u16 {
        self.1
    }

    /// Number of minutes this range spans
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// assert_eq!(TimeRange::new(60, 90).duration(), 30);
    /// assert_eq!(TimeRange::new(60, 60).duration(), 0);
    /// assert_eq!(TimeRange::WHOLE_DAY.duration(), 24 * 60);
    /// ```
    pub fn duration(self) -> u16 {
        self.1 - self.0
    }

    /// Whether two ranges share at least one minute.
    /// Half-open semantics: ranges that merely touch do not overlap.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::TimeRange;
    ///
    /// let morning = TimeRange::new(540, 600);
    ///
    /// assert!(morning.overlaps(TimeRange::new(570, 630)));
    /// assert!(morning.overlaps(TimeRange::new(550, 560)));
    /// assert!(!morning.overlaps(TimeRange::new(600, 660)));
    /// ```
    pub fn overlaps(self, other: TimeRange) -> bool {
        self.0 < other.1 && other.0 < self.1
    }

    /// Whether `minute` falls within this range. The end is excluded,
    /// except that a range ending at `END_OF_DAY` contains that minute.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{TimeRange, END_OF_DAY};
    ///
    /// let range = TimeRange::new(120, 180);
    /// assert!(range.contains(120));
    /// assert!(range.contains(179));
    /// assert!(!range.contains(180));
    ///
    /// let tail = TimeRange::new(1380, END_OF_DAY);
    /// assert!(tail.contains(END_OF_DAY));
    /// ```
    pub fn contains(self, minute: u16) -> bool {
        minute >= self.0 && (minute < self.1 || (minute == self.1 && self.1 == END_OF_DAY))
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for TimeRange {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let a = u.int_in_range(START_OF_DAY..=END_OF_DAY)?;
        let b = u.int_in_range(START_OF_DAY..=END_OF_DAY)?;
        if a <= b {
            Ok(TimeRange(a, b))
        } else {
            Ok(TimeRange(b, a))
        }
    }
}

pub trait TimeMerge {
    fn time_merge(self) -> Vec<TimeRange>;
}

impl<'a, T> TimeMerge for T
where
    T: Iterator<Item = &'a TimeRange>,
{
    /// Combines overlapping and adjacent TimeRanges together.
    /// Input must already be sorted by start.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{TimeMerge, TimeRange};
    ///
    /// let busy = vec![
    ///     TimeRange::new(0, 60),
    ///     TimeRange::new(30, 90),
    ///     TimeRange::new(90, 120),
    ///     TimeRange::new(300, 330),
    /// ];
    ///
    /// assert_eq!(
    ///     busy.iter().time_merge(),
    ///     vec![TimeRange::new(0, 120), TimeRange::new(300, 330)]
    /// );
    /// ```
    fn time_merge(self) -> Vec<TimeRange> {
        let size_hint = self.size_hint().1.unwrap_or(0);
        let (last, mut acc) = self.fold(
            (None, Vec::with_capacity(size_hint)),
            |(last, mut acc), &curr| match last {
                None => (Some(curr), acc),
                Some(time) => {
                    if curr.start() <= time.end() {
                        (
                            Some(TimeRange::new(
                                time.start().min(curr.start()),
                                time.end().max(curr.end()),
                            )),
                            acc,
                        )
                    } else {
                        acc.push(time);
                        (Some(curr), acc)
                    }
                }
            },
        );

        if let Some(time) = last {
            acc.push(time);
        }

        acc
    }
}

pub trait AvailableSlots {
    fn available_slots(self, min_duration: u16) -> BTreeSet<TimeRange>;
}

impl<'a, T> AvailableSlots for T
where
    T: Iterator<Item = &'a TimeRange>,
{
    /// Self is the day's conflicting ranges, sorted by start.
    /// Sweeps them left to right and returns every maximal free gap of
    /// at least `min_duration` minutes, ordered by start.
    ///
    /// Overlapping and nested conflicts extend a single running
    /// unavailable block; a conflict starting at or past the block's end
    /// closes it and opens the next one. An empty input leaves the whole
    /// day free.
    ///
    /// # Examples
    /// ```
    /// use terminfinder::time::{AvailableSlots, TimeRange};
    ///
    /// let conflicts = vec![TimeRange::new(60, 120), TimeRange::new(90, 150)];
    ///
    /// let slots: Vec<TimeRange> = conflicts.iter().available_slots(30).into_iter().collect();
    ///
    /// assert_eq!(slots, vec![TimeRange::new(0, 60), TimeRange::new(150, 1440)]);
    /// ```
    ///
    /// A gap of exactly `min_duration` qualifies:
    /// ```
    /// use terminfinder::time::{AvailableSlots, TimeRange};
    ///
    /// let conflicts = vec![TimeRange::new(0, 700), TimeRange::new(730, 1440)];
    ///
    /// let slots: Vec<TimeRange> = conflicts.iter().available_slots(30).into_iter().collect();
    ///
    /// assert_eq!(slots, vec![TimeRange::new(700, 730)]);
    /// ```
    fn available_slots(mut self, min_duration: u16) -> BTreeSet<TimeRange> {
        let mut slots = BTreeSet::new();

        let first = match self.next() {
            Some(&first) => first,
            None => {
                slots.insert(TimeRange::WHOLE_DAY);
                return slots;
            }
        };

        let mut available_start = START_OF_DAY;
        let mut unavailable_start = first.start();
        let mut unavailable_end = first.end();

        for &conflict in self {
            if conflict.start() < unavailable_end {
                // Overlapping or nested conflict extends the running block.
                unavailable_end = unavailable_end.max(conflict.end());
            } else {
                let gap = TimeRange::new(available_start, unavailable_start);
                if gap.duration() >= min_duration {
                    slots.insert(gap);
                }
                available_start = unavailable_end;
                unavailable_start = conflict.start();
                unavailable_end = conflict.end();
            }
        }

        let gap = TimeRange::new(available_start, unavailable_start);
        if gap.duration() >= min_duration {
            slots.insert(gap);
        }

        let tail = TimeRange::new(unavailable_end, END_OF_DAY);
        if tail.duration() >= min_duration {
            slots.insert(tail);
        }

        slots
    }
}
