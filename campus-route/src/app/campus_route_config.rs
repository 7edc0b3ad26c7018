use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::CampusRouteError;
use crate::model::{route::CalibrationConfig, schedule::DuplicateReferencePolicy};

/// settings for loading a schedule and building dataset. every field has a default,
/// so a configuration file only needs to name what it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CampusRouteConfig {
    /// pixel width of the campus reference image the building positions refer to
    pub image_width: f64,
    /// pixel height of the campus reference image
    pub image_height: f64,
    pub calibration: CalibrationConfig,
    pub duplicate_reference_policy: DuplicateReferencePolicy,
}

impl Default for CampusRouteConfig {
    fn default() -> Self {
        Self {
            image_width: 1000.0,
            image_height: 1000.0,
            calibration: CalibrationConfig::default(),
            duplicate_reference_policy: DuplicateReferencePolicy::default(),
        }
    }
}

impl CampusRouteConfig {
    pub const ENV_PREFIX: &'static str = "CAMPUS_ROUTE";

    /// layers the defaults, an optional TOML or JSON file (format taken from the file
    /// extension) and `CAMPUS_ROUTE__*` environment variables, in that order.
    pub fn load(filepath: Option<&Path>) -> Result<CampusRouteConfig, CampusRouteError> {
        let defaults =
            Config::try_from(&CampusRouteConfig::default()).map_err(|e| {
                CampusRouteError::ConfigReadError {
                    msg: String::from("failed building default configuration"),
                    source: e,
                }
            })?;
        let mut builder = Config::builder().add_source(defaults);
        if let Some(path) = filepath {
            builder = builder.add_source(File::from(path));
        }
        let source = filepath
            .map(|p| format!("'{}'", p.display()))
            .unwrap_or_else(|| String::from("defaults"));
        let config = builder
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CampusRouteError::ConfigReadError {
                msg: format!("failed reading configuration from {source}"),
                source: e,
            })?;
        let result = config
            .try_deserialize::<CampusRouteConfig>()
            .map_err(|e| CampusRouteError::ConfigReadError {
                msg: format!("failed deserializing configuration from {source}"),
                source: e,
            })?;
        result.validate()?;
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), CampusRouteError> {
        if !(self.image_width > 0.0 && self.image_height > 0.0) {
            return Err(CampusRouteError::ConfigurationError(format!(
                "image dimensions must be positive, found {}x{}",
                self.image_width, self.image_height
            )));
        }
        if !(self.calibration.default_scale > 0.0) {
            return Err(CampusRouteError::ConfigurationError(format!(
                "default distance scale must be positive, found {}",
                self.calibration.default_scale
            )));
        }
        Ok(())
    }
}
