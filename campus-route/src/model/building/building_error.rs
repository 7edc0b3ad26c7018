use crate::model::coordinate::CoordinateError;

#[derive(thiserror::Error, Debug)]
pub enum BuildingError {
    #[error("building '{id}' has an invalid location: {source}")]
    InvalidLocation {
        id: String,
        source: CoordinateError,
    },
    #[error("building '{id}' has a non-numeric pixel value '{value}'")]
    InvalidPixelValue { id: String, value: String },
}
