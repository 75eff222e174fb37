use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One request to find time for a meeting within the day.
///
/// Required attendees constrain every answer; optional attendees are
/// accommodated only when doing so leaves at least one candidate slot.
/// The two sets may share identifiers without special-casing.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct MeetingRequest {
    #[serde(rename = "requiredAttendees")]
    pub required_attendees: HashSet<String>,
    #[serde(rename = "optionalAttendees")]
    pub optional_attendees: HashSet<String>,
    pub duration: u16,
}

impl MeetingRequest {
    pub fn new(
        required_attendees: HashSet<String>,
        optional_attendees: HashSet<String>,
        duration: u16,
    ) -> MeetingRequest {
        MeetingRequest {
            required_attendees,
            optional_attendees,
            duration,
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for MeetingRequest {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut required_attendees = HashSet::new();
        for _ in 0..u.arbitrary_len::<u8>()?.min(3) {
            required_attendees.insert(u.int_in_range(0..=7u8)?.to_string());
        }
        let mut optional_attendees = HashSet::new();
        for _ in 0..u.arbitrary_len::<u8>()?.min(3) {
            optional_attendees.insert(u.int_in_range(0..=7u8)?.to_string());
        }
        // Unrestricted so oversized durations exercise the rejection path.
        let duration = u.arbitrary::<u16>()?;
        Ok(MeetingRequest {
            required_attendees,
            optional_attendees,
            duration,
        })
    }
}
