#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::float::{is_equal_float_pair, TWELVE_DECIMAL_PLACES};
use crate::geometry::PointSequence;
use crate::units::degrees_to_radians;

/// A location on the earth, in degrees.
///
/// Note the field order: latitude first. Conversions to and from [`geo::Point`] map
/// longitude to `x` and latitude to `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude and longitude converted to radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (degrees_to_radians(self.lat), degrees_to_radians(self.lng))
    }

    /// `true` if both coordinates agree to twelve decimal places.
    pub fn is_equal_location(&self, other: &Point) -> bool {
        is_equal_float_pair(
            self.lat,
            self.lng,
            other.lat,
            other.lng,
            TWELVE_DECIMAL_PLACES,
        )
    }
}

/// `(lat, lng)`
impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// `[lat, lng]`
impl From<[f64; 2]> for Point {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

impl PointSequence for Point {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(std::iter::once(self))
    }
}
