use crate::event::Event;
use crate::meeting::MeetingRequest;
use crate::query::MeetingQuery;
use crate::time::{TimeRange, END_OF_DAY};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported length of {found} (at most {expected})")]
    UnsupportedLength { expected: usize, found: usize },
    #[error("Invalid time range [{start}, {end}) in {location}")]
    InvalidTimeRange {
        location: String,
        start: u16,
        end: u16,
    },
}

/// Deserializable envelope around one query: the day's events plus the
/// meeting request. Callers that accept untrusted input run `validate`
/// here; the engine itself assumes well-formed ranges.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Input {
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl Default for Input {
    fn default() -> Self {
        Input {
            events: vec![],
            request: MeetingRequest::default(),
        }
    }
}

impl Input {
    pub fn new(events: Vec<Event>, request: MeetingRequest) -> Self {
        Input { events, request }
    }

    /// Rejects inputs the engine makes no promises about: ranges with
    /// `start > end` or reaching past the end of the day, and inputs
    /// larger than a single day can meaningfully contain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // One event per minute of the day is already more than a
        // calendar can render.
        if self.events.len() > END_OF_DAY as usize {
            return Err(ValidationError::UnsupportedLength {
                expected: END_OF_DAY as usize,
                found: self.events.len(),
            });
        }

        let attendee_count =
            self.request.required_attendees.len() + self.request.optional_attendees.len();
        if attendee_count > 100 {
            return Err(ValidationError::UnsupportedLength {
                expected: 100,
                found: attendee_count,
            });
        }

        for event in &self.events {
            let TimeRange(start, end) = event.when;
            if start > end || end > END_OF_DAY {
                return Err(ValidationError::InvalidTimeRange {
                    location: format!("Event ({})", event.name),
                    start,
                    end,
                });
            }
        }

        Ok(())
    }

    /// Validates, then answers the request. Infeasible requests still
    /// answer `Ok` with an empty list; `Err` is reserved for malformed
    /// input.
    pub fn find_times(&self) -> Result<Vec<TimeRange>, ValidationError> {
        self.validate()?;

        debug!(
            "querying {} event(s) for a {} minute meeting",
            self.events.len(),
            self.request.duration
        );

        Ok(MeetingQuery::new(self.events.clone()).query(&self.request))
    }
}
