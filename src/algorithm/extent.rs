use crate::bbox::{BoundingBox, BoundsBuilder};
use crate::geometry::PointSequence;

/// Computes the extent (bounding box) of a geometry.
pub trait Extent {
    /// The smallest box containing every point of the geometry, or
    /// [`BoundingBox::infinite`] if it has no points.
    fn extent(&self) -> BoundingBox;
}

impl<G: PointSequence + ?Sized> Extent for G {
    fn extent(&self) -> BoundingBox {
        let mut bounds = BoundsBuilder::new();
        bounds.add_points(self);
        bounds.finish()
    }
}

/// The smallest box containing every point of every shape.
///
/// With no shapes, or only empty ones, this is the [`BoundingBox::infinite`] sentinel,
/// which callers must treat as "no extent".
///
/// # Examples
///
/// ```
/// use geoturf::algorithm::extent;
/// use geoturf::bbox::BoundingBox;
/// use geoturf::geometry::{LineString, Point};
///
/// let line = LineString::from(vec![(-10.0, 102.0), (1.0, 103.0), (0.0, 104.0), (4.0, 130.0)]);
/// let point = Point::new(0.5, 100.0);
/// assert_eq!(
///     extent(&[&line, &point]),
///     BoundingBox::new(100.0, -10.0, 130.0, 4.0)
/// );
/// ```
pub fn extent(shapes: &[&dyn PointSequence]) -> BoundingBox {
    let mut bounds = BoundsBuilder::new();
    for shape in shapes {
        bounds.add_points(*shape);
    }
    bounds.finish()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{LineString, MultiPoint, Shape};
    use crate::test::shapes;

    #[test]
    fn single_shapes() {
        let cases: Vec<(Shape, BoundingBox)> = vec![
            (shapes::point().into(), BoundingBox::new(102.0, 0.5, 102.0, 0.5)),
            (
                shapes::line_string().into(),
                BoundingBox::new(102.0, -10.0, 130.0, 4.0),
            ),
            (
                shapes::polygon().into(),
                BoundingBox::new(100.0, 0.0, 101.0, 1.0),
            ),
            (
                shapes::multi_line_string().into(),
                BoundingBox::new(100.0, 0.0, 103.0, 3.0),
            ),
            (
                shapes::multi_polygon().into(),
                BoundingBox::new(100.0, 0.0, 103.0, 3.0),
            ),
        ];

        for (shape, expected) in &cases {
            assert_eq!(shape.extent(), *expected);
            assert_eq!(extent(&[shape]), *expected);
        }

        let all: Vec<&dyn PointSequence> = cases
            .iter()
            .map(|(shape, _)| shape as &dyn PointSequence)
            .collect();
        assert_eq!(extent(&all), BoundingBox::new(100.0, -10.0, 130.0, 4.0));
    }

    #[test]
    fn no_shapes() {
        assert_eq!(extent(&[]), BoundingBox::infinite());
    }

    #[test]
    fn empty_shapes() {
        let line = LineString::default();
        let points = MultiPoint::default();
        assert_eq!(extent(&[&line, &points]), BoundingBox::infinite());
        assert_eq!(line.extent(), BoundingBox::infinite());
    }
}
