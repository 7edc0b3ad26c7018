use super::{DailyItinerary, ItineraryEntry};
use crate::model::schedule::{CourseOffering, DayOfWeek};

/// collects every session of `offerings` that meets on `day`. an offering meeting
/// twice that day contributes two entries.
pub fn build_itinerary<'a, I>(offerings: I, day: DayOfWeek) -> DailyItinerary<'a>
where
    I: IntoIterator<Item = &'a CourseOffering>,
{
    let entries = offerings
        .into_iter()
        .flat_map(|offering| {
            offering
                .sessions_on(day)
                .map(move |session| ItineraryEntry::new(offering, session))
        })
        .collect::<Vec<_>>();
    log::debug!("{} sessions meet on {day}", entries.len());
    DailyItinerary::new(day, entries)
}
