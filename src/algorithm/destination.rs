use crate::geometry::Point;
use crate::units::{degrees_to_radians, distance_to_radians, radians_to_degrees, Unit};

/// The point reached by travelling `distance` along the great circle leaving `start` at
/// `bearing` degrees.
///
/// Longitudes are not wrapped back into `[-180, 180]`.
///
/// # Examples
///
/// ```
/// use geoturf::algorithm::destination;
/// use geoturf::geometry::Point;
/// use geoturf::units::Unit;
///
/// let dest = destination(&Point::new(39.0, -75.0), 100.0, 90.0, Unit::Kilometers);
/// assert!((dest.lat - 38.994288534328966).abs() < 1e-7);
/// assert!((dest.lng - -73.84321473156825).abs() < 1e-7);
/// ```
pub fn destination(start: &Point, distance: f64, bearing: f64, unit: Unit) -> Point {
    let (lat, lng) = start.to_radians();
    let bearing = degrees_to_radians(bearing);
    let arc = distance_to_radians(distance, unit);

    let dest_lat = (lat.sin() * arc.cos() + lat.cos() * arc.sin() * bearing.cos()).asin();
    let dest_lng = lng
        + (bearing.sin() * arc.sin() * lat.cos()).atan2(arc.cos() - lat.sin() * dest_lat.sin());

    Point::new(radians_to_degrees(dest_lat), radians_to_degrees(dest_lng))
}
