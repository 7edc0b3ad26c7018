use serde::Serialize;

use super::{ActivityKind, DayOfWeek, Room, TimeSlot};

/// one occurrence of an offering: a day, a time window and a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingSession {
    pub day: DayOfWeek,
    pub time_slot: TimeSlot,
    pub room: Room,
    pub activity: ActivityKind,
}
