use crate::bbox::BoundingBox;
use crate::geometry::Point;
use crate::units::{degrees_to_radians, radians_to_degrees, Unit};

/// Shift a point by `horizontal` meters east and `vertical` meters north.
///
/// This is a small-angle approximation: the displacement is divided by the earth radius,
/// and by `cos(latitude)` for the longitude. It is only accurate for short distances away
/// from the poles.
pub fn translate(point: &Point, horizontal: f64, vertical: f64) -> Point {
    let radius = Unit::Meters.factor();
    let lat_displacement = vertical / radius;
    let lng_displacement = horizontal / (radius * degrees_to_radians(point.lat).cos());

    Point::new(
        point.lat + radians_to_degrees(lat_displacement),
        point.lng + radians_to_degrees(lng_displacement),
    )
}

/// A box centred on `point` reaching `width` meters away on each axis.
///
/// Uses [`translate`], so the result drifts from [`expand`][crate::algorithm::expand] for
/// the same width as the width grows.
pub fn surround(point: &Point, width: f64) -> BoundingBox {
    let bottom_left = translate(point, -width, -width);
    let top_right = translate(point, width, width);
    BoundingBox::new(bottom_left.lng, bottom_left.lat, top_right.lng, top_right.lat)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::algorithm::{distance, expand};

    #[test]
    fn translate_north_and_east() {
        let origin = Point::new(0.0, 0.0);
        let moved = translate(&origin, 0.0, 6373000.0);
        assert_abs_diff_eq!(moved.lat, radians_to_degrees(1.0), epsilon = 1e-12);
        assert_eq!(moved.lng, 0.0);

        let east = translate(&origin, 1000.0, 0.0);
        assert_abs_diff_eq!(
            distance(&origin, &east, Unit::Meters),
            1000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn surround_is_centred() {
        let p = Point::new(35.4691, -97.522259);
        let bbox = surround(&p, 500.0);
        assert!(bbox.contains_point(&p));
        assert_abs_diff_eq!(bbox.center().lat, p.lat, epsilon = 1e-12);
        assert_abs_diff_eq!(bbox.center().lng, p.lng, epsilon = 1e-12);
        assert_abs_diff_eq!(
            distance(&bbox.south_west(), &Point::new(p.lat, bbox.west), Unit::Meters),
            500.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn close_to_expand_for_small_widths() {
        let p = Point::new(35.4691, -97.522259);
        let approx = surround(&p, 100.0);
        let exact = expand(0.1, Unit::Kilometers, &[&p]);
        assert_abs_diff_eq!(approx.west, exact.west, epsilon = 1e-6);
        assert_abs_diff_eq!(approx.south, exact.south, epsilon = 1e-6);
        assert_abs_diff_eq!(approx.east, exact.east, epsilon = 1e-6);
        assert_abs_diff_eq!(approx.north, exact.north, epsilon = 1e-6);
    }

    #[test]
    fn zero_width() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(surround(&p, 0.0), BoundingBox::new(20.0, 10.0, 20.0, 10.0));
    }
}
