use serde::Serialize;
use std::sync::Arc;

use super::{Course, DayOfWeek, DeliveryMode, Instructor, MeetingSession};

/// one scheduled section of a course, keyed by its reference number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseOffering {
    pub reference: String,
    pub course: Arc<Course>,
    pub delivery_mode: DeliveryMode,
    pub sessions: Vec<MeetingSession>,
    pub instructors: Vec<Arc<Instructor>>,
}

impl CourseOffering {
    pub fn sessions_on(&self, day: DayOfWeek) -> impl Iterator<Item = &MeetingSession> {
        self.sessions.iter().filter(move |s| s.day == day)
    }

    /// folds a later row for the same reference number into this offering: its
    /// sessions are appended and its instructors are adopted only if none are known.
    pub fn merge(&mut self, other: CourseOffering) {
        self.sessions.extend(other.sessions);
        if self.instructors.is_empty() {
            self.instructors = other.instructors;
        }
    }
}
