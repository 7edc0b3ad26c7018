use indexmap::IndexMap;
use itertools::Itertools;
use std::sync::Arc;

use super::{Building, BuildingError};
use crate::model::coordinate::NormalizedPoint;

/// registry of campus buildings keyed by identifier, in registration order.
///
/// buildings are shared through [`Arc`] so that rooms and route segments hold
/// references into the directory rather than copies.
#[derive(Debug, Default, Clone)]
pub struct BuildingDirectory {
    buildings: IndexMap<String, Arc<Building>>,
    initialized: bool,
}

impl BuildingDirectory {
    /// minimum fields on a dataset row: identifier, name, pixel x, pixel y.
    pub const MIN_ROW_FIELDS: usize = 4;

    pub fn new() -> BuildingDirectory {
        BuildingDirectory::default()
    }

    /// loads the building dataset. each row is `(identifier, name, pixel_x, pixel_y)`
    /// optionally followed by `(entrance_x, entrance_y)` pixel pairs. rows with fewer
    /// than four fields are skipped.
    ///
    /// a second call on an initialized directory does nothing. a row with an
    /// unreadable or out-of-image pixel position fails the whole call and leaves the
    /// directory unchanged.
    pub fn initialize(
        &mut self,
        rows: &[Vec<String>],
        image_width: f64,
        image_height: f64,
    ) -> Result<(), BuildingError> {
        if self.initialized {
            log::debug!("building directory already initialized, ignoring {} rows", rows.len());
            return Ok(());
        }
        let mut loaded: Vec<Building> = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if row.len() < Self::MIN_ROW_FIELDS {
                log::debug!("skipping building row {idx} with {} fields", row.len());
                continue;
            }
            let id = row[0].trim();
            if id.is_empty() {
                log::debug!("skipping building row {idx} with blank identifier");
                continue;
            }
            let location = read_location(id, &row[2], &row[3], image_width, image_height)?;
            let entrances = row[Self::MIN_ROW_FIELDS..]
                .iter()
                .tuples()
                .map(|(ex, ey)| read_location(id, ex, ey, image_width, image_height))
                .collect::<Result<Vec<_>, _>>()?;
            loaded.push(Building::new(id, &row[1], location).with_entrances(entrances));
        }
        for building in loaded {
            self.register(building);
        }
        self.initialized = true;
        log::info!("building directory initialized with {} buildings", self.len());
        Ok(())
    }

    /// returns the building registered under `id`, creating it if missing.
    ///
    /// unknown identifiers get a placeholder named `"Building {id}"` at the center
    /// of the campus image, which is registered so later lookups share it. schedules
    /// routinely reference buildings absent from the dataset, and a placeholder keeps
    /// every room drawable instead of failing the whole load.
    pub fn get_or_create(&mut self, id: &str) -> Arc<Building> {
        let key = id.trim();
        if let Some(building) = self.buildings.get(key) {
            return building.clone();
        }
        log::warn!("building '{key}' not found in building dataset, placing it at the campus center");
        self.register(Building::placeholder(key))
    }

    /// lookup without synthesizing a placeholder.
    pub fn find(&self, id: &str) -> Option<&Arc<Building>> {
        self.buildings.get(id.trim())
    }

    /// adds a building, replacing any previous entry (including a placeholder)
    /// with the same identifier.
    pub fn register(&mut self, building: Building) -> Arc<Building> {
        let building = Arc::new(building);
        self.buildings.insert(building.id.clone(), building.clone());
        building
    }

    pub fn all_buildings(&self) -> impl Iterator<Item = &Arc<Building>> {
        self.buildings.values()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

fn read_location(
    id: &str,
    pixel_x: &str,
    pixel_y: &str,
    image_width: f64,
    image_height: f64,
) -> Result<NormalizedPoint, BuildingError> {
    let x = parse_pixel(id, pixel_x)?;
    let y = parse_pixel(id, pixel_y)?;
    NormalizedPoint::from_pixels(x, y, image_width, image_height).map_err(|source| {
        BuildingError::InvalidLocation {
            id: id.to_string(),
            source,
        }
    })
}

fn parse_pixel(id: &str, value: &str) -> Result<f64, BuildingError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| BuildingError::InvalidPixelValue {
            id: id.to_string(),
            value: value.to_string(),
        })
}
