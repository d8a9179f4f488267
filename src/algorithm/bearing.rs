use crate::geometry::Point;
use crate::units::radians_to_degrees;

/// Initial bearing of the great circle from `from` to `to`, in degrees clockwise from north.
///
/// The result lies in `(-180, 180]`. Use [`bearing_to_angle`][crate::units::bearing_to_angle]
/// to get a compass angle in `[0, 360)`.
pub fn bearing(from: &Point, to: &Point) -> f64 {
    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();

    let a = (lng2 - lng1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lng2 - lng1).cos();
    radians_to_degrees(a.atan2(b))
}
