use serde::Serialize;

use crate::model::schedule::{CourseOffering, MeetingSession, TimeSlot};

/// one session attended on the itinerary's day, together with its offering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItineraryEntry<'a> {
    #[serde(rename = "reference")]
    #[serde(serialize_with = "serialize_reference")]
    pub offering: &'a CourseOffering,
    pub session: &'a MeetingSession,
}

impl<'a> ItineraryEntry<'a> {
    pub fn new(offering: &'a CourseOffering, session: &'a MeetingSession) -> ItineraryEntry<'a> {
        ItineraryEntry { offering, session }
    }

    pub fn time_slot(&self) -> &'a TimeSlot {
        &self.session.time_slot
    }
}

fn serialize_reference<S>(offering: &&CourseOffering, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&offering.reference)
}
