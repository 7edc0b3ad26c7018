use serde::{Deserialize, Serialize};

/// two reference buildings whose real-world separation is known, used to turn
/// normalized distances into meters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CalibrationConfig {
    pub from_building: String,
    pub to_building: String,
    pub known_distance_meters: f64,
    /// meters per normalized unit when calibration is not possible
    pub default_scale: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            from_building: String::from("59"),
            to_building: String::from("11"),
            known_distance_meters: 350.0,
            default_scale: 900.0,
        }
    }
}
