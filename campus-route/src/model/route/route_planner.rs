use itertools::Itertools;
use uom::si::length::meter;

use super::{DistanceEstimator, RoutePath, RouteVisualizationModel};
use crate::model::itinerary::DailyItinerary;

/// turns a day's itinerary into a route between the rooms it visits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutePlanner {
    estimator: DistanceEstimator,
}

impl RoutePlanner {
    pub fn new(estimator: DistanceEstimator) -> RoutePlanner {
        RoutePlanner { estimator }
    }

    pub fn estimator(&self) -> &DistanceEstimator {
        &self.estimator
    }

    /// one stop per itinerary entry, at the building of the entry's room.
    pub fn build_route_path<'a>(&self, itinerary: &DailyItinerary<'a>) -> RoutePath<'a> {
        let stops = itinerary
            .entries()
            .iter()
            .map(|entry| &*entry.session.room.building)
            .collect::<Vec<_>>();
        RoutePath::from_stops(stops, &self.estimator)
    }

    pub fn build_summary(&self, itinerary: &DailyItinerary, route: &RoutePath) -> Vec<String> {
        let mut lines = vec![
            format!("Selected Day: {}", itinerary.day()),
            format!("Number of Courses: {}", itinerary.len()),
        ];
        if !itinerary.is_empty() {
            let courses = itinerary
                .entries()
                .iter()
                .map(|entry| entry.offering.course.code.as_str())
                .join(", ");
            lines.push(format!("Courses: {courses}"));
        }
        lines.push(format!(
            "Buildings Visited: {}",
            route.distinct_building_ids().len()
        ));
        lines.push(format!(
            "Total Distance: {:.0} meters",
            route.total_distance().get::<meter>()
        ));
        lines
    }

    pub fn build_visualization<'a>(
        &self,
        itinerary: DailyItinerary<'a>,
    ) -> RouteVisualizationModel<'a> {
        let route = self.build_route_path(&itinerary);
        let summary = self.build_summary(&itinerary, &route);
        let offerings = itinerary.offerings();
        log::debug!(
            "route for {} visits {} buildings over {:.0} m",
            itinerary.day(),
            route.buildings().len(),
            route.total_distance().get::<meter>()
        );
        RouteVisualizationModel {
            itinerary,
            offerings,
            route,
            summary,
        }
    }
}
