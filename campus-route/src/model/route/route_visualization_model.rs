use serde::Serialize;

use super::RoutePath;
use crate::model::itinerary::DailyItinerary;
use crate::model::schedule::CourseOffering;

/// everything a renderer needs to draw one day's route: the buildings in visiting
/// order, the segments between them and the summary text. no schedule logic is left
/// to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteVisualizationModel<'a> {
    pub itinerary: DailyItinerary<'a>,
    pub offerings: Vec<&'a CourseOffering>,
    pub route: RoutePath<'a>,
    pub summary: Vec<String>,
}
