pub mod building;
pub mod coordinate;
pub mod itinerary;
pub mod parser;
pub mod route;
pub mod schedule;
