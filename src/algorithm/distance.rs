use crate::geometry::Point;
use crate::units::{degrees_to_radians, radians_to_distance, Unit};

/// Great-circle distance between two points using the [haversine formula].
///
/// The earth radius used is the one attached to `unit` (6373 km, 3960 mi, ...), which is
/// why the result differs slightly from implementations using the IUGG mean radius.
///
/// # Examples
///
/// ```
/// use geoturf::algorithm::distance;
/// use geoturf::geometry::Point;
/// use geoturf::units::Unit;
///
/// let d = distance(
///     &Point::new(39.984, -75.343),
///     &Point::new(39.123, -75.534),
///     Unit::Miles,
/// );
/// assert!((d - 60.37218405837491).abs() < 1e-7);
/// ```
///
/// [haversine formula]: https://en.wikipedia.org/wiki/Haversine_formula
pub fn distance(from: &Point, to: &Point, unit: Unit) -> f64 {
    let d_lat = degrees_to_radians(to.lat - from.lat);
    let d_lng = degrees_to_radians(to.lng - from.lng);
    let lat1 = degrees_to_radians(from.lat);
    let lat2 = degrees_to_radians(to.lat);

    let a = (d_lat / 2.0).sin().powi(2) + (d_lng / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    radians_to_distance(c, unit)
}
