use itertools::Itertools;
use serde::Serialize;

use super::ItineraryEntry;
use crate::model::schedule::{CourseOffering, DayOfWeek};

/// the sessions attended on one day, ordered by start time. entries sharing a start
/// time keep the order in which they were added.
///
/// the entry list is private so that the ordering holds after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyItinerary<'a> {
    day: DayOfWeek,
    entries: Vec<ItineraryEntry<'a>>,
}

impl<'a> DailyItinerary<'a> {
    pub fn new(day: DayOfWeek, mut entries: Vec<ItineraryEntry<'a>>) -> DailyItinerary<'a> {
        entries.sort_by(|a, b| a.time_slot().start().cmp(b.time_slot().start()));
        DailyItinerary { day, entries }
    }

    /// inserts after every entry starting at or before the new entry's start.
    pub fn push(&mut self, entry: ItineraryEntry<'a>) {
        let start = entry.time_slot().start();
        let idx = self
            .entries
            .partition_point(|e| e.time_slot().start() <= start);
        self.entries.insert(idx, entry);
    }

    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    pub fn entries(&self) -> &[ItineraryEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// the offerings behind the entries, each listed once in itinerary order.
    pub fn offerings(&self) -> Vec<&'a CourseOffering> {
        self.entries
            .iter()
            .map(|e| e.offering)
            .unique_by(|o| o.reference.clone())
            .collect()
    }
}
