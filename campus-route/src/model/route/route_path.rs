use itertools::Itertools;
use serde::Serialize;
use uom::si::f64::Length;
use uom::ConstZero;

use super::{DistanceEstimator, RouteSegment};
use crate::model::building::Building;

/// the buildings visited in order, with one segment between each consecutive pair.
/// a building appears again whenever two consecutive classes share it, and the
/// segment between them has zero length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePath<'a> {
    buildings: Vec<&'a Building>,
    segments: Vec<RouteSegment<'a>>,
}

impl<'a> RoutePath<'a> {
    pub fn from_stops(
        buildings: Vec<&'a Building>,
        estimator: &DistanceEstimator,
    ) -> RoutePath<'a> {
        let segments = buildings
            .iter()
            .tuple_windows()
            .map(|(&from, &to)| RouteSegment {
                from,
                to,
                distance: estimator.distance(from, to),
            })
            .collect();
        RoutePath {
            buildings,
            segments,
        }
    }

    pub fn buildings(&self) -> &[&'a Building] {
        &self.buildings
    }

    pub fn segments(&self) -> &[RouteSegment<'a>] {
        &self.segments
    }

    pub fn total_distance(&self) -> Length {
        self.segments
            .iter()
            .fold(Length::ZERO, |total, segment| total + segment.distance)
    }

    /// identifiers of the buildings visited, each once, in visiting order.
    pub fn distinct_building_ids(&self) -> Vec<&'a str> {
        self.buildings
            .iter()
            .map(|&b| b.id.as_str())
            .unique()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}
