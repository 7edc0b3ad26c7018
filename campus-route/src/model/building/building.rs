use serde::{ser::SerializeStruct, Serialize, Serializer};
use std::fmt::Display;

use crate::model::coordinate::NormalizedPoint;

/// a campus building keyed by the identifier used in the schedule's building column.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: String,
    pub name: String,
    /// base location of the building on the reference image
    pub location: NormalizedPoint,
    /// entrance points in priority order. may be empty.
    pub entrances: Vec<NormalizedPoint>,
}

impl Building {
    pub fn new(id: &str, name: &str, location: NormalizedPoint) -> Building {
        Building {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            location,
            entrances: vec![],
        }
    }

    pub fn with_entrances(mut self, entrances: Vec<NormalizedPoint>) -> Building {
        self.entrances = entrances;
        self
    }

    /// stand-in for an identifier missing from the building dataset, placed at the
    /// center of the campus image.
    pub fn placeholder(id: &str) -> Building {
        let id = id.trim();
        Building::new(id, &format!("Building {id}"), NormalizedPoint::CENTER)
    }

    /// the first registered entrance, or the base location when there are none.
    pub fn primary_entrance(&self) -> &NormalizedPoint {
        self.entrances.first().unwrap_or(&self.location)
    }
}

impl Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.name)
    }
}

/// renderers only draw, so the resolved primary entrance is written alongside
/// the raw entrance list.
impl Serialize for Building {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Building", 5)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("entrances", &self.entrances)?;
        state.serialize_field("primary_entrance", self.primary_entrance())?;
        state.end()
    }
}
