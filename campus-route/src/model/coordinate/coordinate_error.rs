#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("normalized coordinates must be within [0,1], found x={x}, y={y}")]
    OutOfRange { x: f64, y: f64 },
    #[error("reference image dimensions must be positive, found {width}x{height}")]
    InvalidImageDimensions { width: f64, height: f64 },
}
