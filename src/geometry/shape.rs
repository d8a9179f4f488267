use crate::geometry::{
    LineString, MultiLineString, MultiPoint, MultiPolygon, Point, PointSequence, Polygon,
};

/// Any one of the supported geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Shape {
    /// The polygons making up this shape: itself for a polygon, its members for a
    /// multi-polygon, and nothing otherwise.
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Shape::Polygon(polygon) => std::slice::from_ref(polygon),
            Shape::MultiPolygon(multi_polygon) => multi_polygon.polygons(),
            _ => &[],
        }
    }
}

impl PointSequence for Shape {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        match self {
            Shape::Point(g) => g.points(),
            Shape::MultiPoint(g) => g.points(),
            Shape::LineString(g) => g.points(),
            Shape::MultiLineString(g) => g.points(),
            Shape::Polygon(g) => g.points(),
            Shape::MultiPolygon(g) => g.points(),
        }
    }
}

macro_rules! impl_from_variant {
    ($type:ident) => {
        impl From<$type> for Shape {
            fn from(value: $type) -> Self {
                Shape::$type(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(MultiPoint);
impl_from_variant!(LineString);
impl_from_variant!(MultiLineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPolygon);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::shapes;

    #[test]
    fn flatten_preserves_order() {
        let shape: Shape = shapes::multi_line_string().into();
        assert_eq!(
            shape.to_points(),
            vec![
                Point::new(0.0, 100.0),
                Point::new(1.0, 101.0),
                Point::new(2.0, 102.0),
                Point::new(3.0, 103.0),
            ]
        );
    }

    #[test]
    fn multi_polygon_includes_holes() {
        let shape: Shape = shapes::multi_polygon().into();
        let points = shape.to_points();
        assert_eq!(points.len(), 15);
        assert_eq!(points[0], Point::new(2.0, 102.0));
        assert_eq!(points[10], Point::new(0.2, 100.2));
    }

    #[test]
    fn polygons() {
        let polygon: Shape = shapes::polygon().into();
        assert_eq!(polygon.polygons().len(), 1);

        let multi: Shape = shapes::multi_polygon().into();
        assert_eq!(multi.polygons().len(), 2);

        let line: Shape = shapes::line_string().into();
        assert!(line.polygons().is_empty());
    }
}
