use geo::{Distance, Euclidean, Point};
use serde::Serialize;

use super::CoordinateError;

/// a position on the campus reference image, stored as fractions of the image
/// width and height. both components lie in `[0, 1]`, so a point can be scaled
/// back onto any rendering of the same image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedPoint {
    x: f64,
    y: f64,
}

impl NormalizedPoint {
    /// the middle of the reference image, used for buildings with no known location.
    pub const CENTER: NormalizedPoint = NormalizedPoint { x: 0.5, y: 0.5 };

    /// creates a point, failing unless `0 <= x <= 1` and `0 <= y <= 1`.
    /// NaN components are rejected as out of range.
    pub fn new(x: f64, y: f64) -> Result<NormalizedPoint, CoordinateError> {
        let unit = 0.0..=1.0;
        if unit.contains(&x) && unit.contains(&y) {
            Ok(NormalizedPoint { x, y })
        } else {
            Err(CoordinateError::OutOfRange { x, y })
        }
    }

    /// converts a pixel position on the reference image into a normalized point.
    ///
    /// # Arguments
    ///
    /// * `pixel_x`, `pixel_y` - position measured from the top-left corner of the image
    /// * `image_width`, `image_height` - pixel dimensions of the image, both positive
    ///
    /// # Returns
    ///
    /// * the normalized point, or an error if the dimensions are not positive or the
    ///   pixel lies outside of the image bounds
    pub fn from_pixels(
        pixel_x: f64,
        pixel_y: f64,
        image_width: f64,
        image_height: f64,
    ) -> Result<NormalizedPoint, CoordinateError> {
        if !(image_width > 0.0 && image_height > 0.0) {
            return Err(CoordinateError::InvalidImageDimensions {
                width: image_width,
                height: image_height,
            });
        }
        NormalizedPoint::new(pixel_x / image_width, pixel_y / image_height)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn as_point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }

    /// straight-line separation in normalized units.
    pub fn distance_to(&self, other: &NormalizedPoint) -> f64 {
        Euclidean.distance(self.as_point(), other.as_point())
    }
}
