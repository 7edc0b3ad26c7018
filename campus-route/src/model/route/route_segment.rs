use serde::{Serialize, Serializer};
use uom::si::f64::Length;

use crate::model::building::Building;

/// a walk between two consecutive stops of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSegment<'a> {
    #[serde(serialize_with = "building_id")]
    pub from: &'a Building,
    #[serde(serialize_with = "building_id")]
    pub to: &'a Building,
    #[serde(rename = "distance_meters")]
    pub distance: Length,
}

fn building_id<S: Serializer>(building: &&Building, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&building.id)
}
