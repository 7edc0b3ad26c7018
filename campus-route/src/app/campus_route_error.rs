use crate::model::{building::BuildingError, parser::ScheduleParseError};

#[derive(thiserror::Error, Debug)]
pub enum CampusRouteError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid campus-route configuration: {0}")]
    ConfigurationError(String),
    #[error("failed reading '{filepath}': {source}")]
    FileReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed reading CSV file '{filepath}': {source}")]
    CsvReadError { filepath: String, source: csv::Error },
    #[error("failed reading JSON file '{filepath}': {source}")]
    JsonReadError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure loading building dataset: {0}")]
    BuildingError(#[from] BuildingError),
    #[error("failure parsing schedule: {0}")]
    ScheduleParseError(#[from] ScheduleParseError),
    #[error("no reference numbers provided")]
    NoReferencesProvided,
    #[error("failure writing output: {0}")]
    OutputError(String),
}
