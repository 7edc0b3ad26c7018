mod coordinate_error;
mod normalized_point;

pub use coordinate_error::CoordinateError;
pub use normalized_point::NormalizedPoint;
