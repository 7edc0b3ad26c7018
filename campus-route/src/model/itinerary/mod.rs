mod daily_itinerary;
mod itinerary_builder;
mod itinerary_entry;

pub use daily_itinerary::DailyItinerary;
pub use itinerary_builder::build_itinerary;
pub use itinerary_entry::ItineraryEntry;
