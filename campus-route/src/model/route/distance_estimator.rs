use serde::Serialize;
use uom::si::{f64::Length, length::meter};

use super::CalibrationConfig;
use crate::model::building::{Building, BuildingDirectory};

/// converts separations on the campus image into meters with a single scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceEstimator {
    meters_per_unit: f64,
}

impl DistanceEstimator {
    pub const DEFAULT_SCALE: f64 = 900.0;

    pub fn new(meters_per_unit: f64) -> DistanceEstimator {
        DistanceEstimator { meters_per_unit }
    }

    /// derives the scale from the known separation of the two configured reference
    /// buildings, measured between their base locations.
    ///
    /// falls back to the configured default scale when a reference building is not
    /// registered, the buildings coincide, or the result is not a positive number.
    /// placeholders are never created here.
    pub fn calibrate(
        directory: &BuildingDirectory,
        config: &CalibrationConfig,
    ) -> DistanceEstimator {
        let fallback = DistanceEstimator::new(config.default_scale);
        let (from, to) = match (
            directory.find(&config.from_building),
            directory.find(&config.to_building),
        ) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                log::warn!(
                    "calibration buildings '{}' and '{}' are not both registered, using default scale of {} m per unit",
                    config.from_building,
                    config.to_building,
                    config.default_scale
                );
                return fallback;
            }
        };
        let separation = from.location.distance_to(&to.location);
        let scale = config.known_distance_meters / separation;
        if separation > 0.0 && scale.is_finite() && scale > 0.0 {
            log::info!(
                "calibrated distance scale to {scale:.1} m per unit from {from} to {to} ({} m)",
                config.known_distance_meters
            );
            DistanceEstimator::new(scale)
        } else {
            log::warn!(
                "calibration between {from} and {to} produced no usable scale, using default scale of {} m per unit",
                config.default_scale
            );
            fallback
        }
    }

    pub fn scale(&self) -> f64 {
        self.meters_per_unit
    }

    /// estimated walking distance between the primary entrances of two buildings.
    pub fn distance(&self, from: &Building, to: &Building) -> Length {
        let units = from.primary_entrance().distance_to(to.primary_entrance());
        Length::new::<meter>(units * self.meters_per_unit)
    }
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        DistanceEstimator::new(Self::DEFAULT_SCALE)
    }
}
