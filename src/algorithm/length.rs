use crate::algorithm::distance;
use crate::geometry::{LineString, MultiLineString};
use crate::units::Unit;

/// Determine the length of a geometry as the sum of the haversine distances of its segments.
pub trait HaversineLength {
    /// # Examples
    ///
    /// ```
    /// use geoturf::algorithm::HaversineLength;
    /// use geoturf::geometry::LineString;
    /// use geoturf::units::Unit;
    ///
    /// let line = LineString::from(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    /// let km = line.haversine_length(Unit::Kilometers);
    /// assert!((km - 222.45).abs() < 0.01);
    /// ```
    fn haversine_length(&self, unit: Unit) -> f64;
}

impl HaversineLength for LineString {
    fn haversine_length(&self, unit: Unit) -> f64 {
        self.segments()
            .map(|(start, end)| distance(start, end, unit))
            .sum()
    }
}

impl HaversineLength for MultiLineString {
    fn haversine_length(&self, unit: Unit) -> f64 {
        self.lines()
            .iter()
            .map(|line| line.haversine_length(unit))
            .sum()
    }
}
