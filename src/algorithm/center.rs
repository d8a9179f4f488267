use crate::algorithm::{extent, Extent};
use crate::geometry::{Point, PointSequence};

/// Compute the center of geometries
///
/// This first computes the axis-aligned bounding box, then takes the center of that box. It
/// is an arithmetic mean of the edges, not a spherical centroid.
pub trait Center {
    fn center(&self) -> Point;
}

impl<G: PointSequence + ?Sized> Center for G {
    fn center(&self) -> Point {
        self.extent().center()
    }
}

/// The center of the extent of all shapes.
///
/// With no points at all both coordinates are `NaN`.
pub fn center(shapes: &[&dyn PointSequence]) -> Point {
    extent(shapes).center()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::LineString;

    #[test]
    fn center_of_extent() {
        let line = LineString::from(vec![
            (35.4691, -97.522259),
            (35.463455, -97.502754),
            (35.463245, -97.508269),
            (35.465779, -97.516809),
        ]);
        let point = Point::new(35.467072, -97.515372);

        let c = center(&[&line, &point]);
        assert_eq!(c.lat, (35.463245 + 35.4691) / 2.0);
        assert_eq!(c.lng, (-97.522259 + -97.502754) / 2.0);
        assert!((c.lat - 35.4661725).abs() < 1e-12);
        assert!((c.lng - -97.5125065).abs() < 1e-12);
    }

    #[test]
    fn single_point() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(p.center(), p);
    }

    #[test]
    fn nothing() {
        let c = center(&[]);
        assert!(c.lat.is_nan());
        assert!(c.lng.is_nan());
    }
}
