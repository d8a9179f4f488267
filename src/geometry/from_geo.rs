//! Conversions between [`geo`] scalars and this crate's geometries.
//!
//! `geo` stores coordinates as `x`/`y`; longitude maps to `x` and latitude to `y`.

use std::borrow::Cow;

use crate::error::GeoTurfError;
use crate::geometry::{
    LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Shape,
};

impl From<geo::Coord> for Point {
    fn from(value: geo::Coord) -> Self {
        Point::new(value.y, value.x)
    }
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        value.0.into()
    }
}

impl From<&geo::Point> for Point {
    fn from(value: &geo::Point) -> Self {
        value.0.into()
    }
}

impl From<Point> for geo::Coord {
    fn from(value: Point) -> Self {
        geo::coord! { x: value.lng, y: value.lat }
    }
}

impl From<Point> for geo::Point {
    fn from(value: Point) -> Self {
        geo::Point(value.into())
    }
}

impl From<&geo::MultiPoint> for MultiPoint {
    fn from(value: &geo::MultiPoint) -> Self {
        MultiPoint(value.iter().map(Point::from).collect())
    }
}

impl From<&geo::LineString> for LineString {
    fn from(value: &geo::LineString) -> Self {
        LineString(value.coords().map(|c| Point::from(*c)).collect())
    }
}

impl From<&geo::MultiLineString> for MultiLineString {
    fn from(value: &geo::MultiLineString) -> Self {
        MultiLineString(value.iter().map(LineString::from).collect())
    }
}

impl From<&geo::Polygon> for Polygon {
    fn from(value: &geo::Polygon) -> Self {
        Polygon::new(
            value.exterior().into(),
            value.interiors().iter().map(LineString::from).collect(),
        )
    }
}

impl From<&geo::MultiPolygon> for MultiPolygon {
    fn from(value: &geo::MultiPolygon) -> Self {
        MultiPolygon(value.iter().map(Polygon::from).collect())
    }
}

impl TryFrom<&geo::Geometry> for Shape {
    type Error = GeoTurfError;

    fn try_from(value: &geo::Geometry) -> Result<Self, Self::Error> {
        let shape = match value {
            geo::Geometry::Point(g) => Shape::Point(g.into()),
            geo::Geometry::MultiPoint(g) => Shape::MultiPoint(g.into()),
            geo::Geometry::LineString(g) => Shape::LineString(g.into()),
            geo::Geometry::MultiLineString(g) => Shape::MultiLineString(g.into()),
            geo::Geometry::Polygon(g) => Shape::Polygon(g.into()),
            geo::Geometry::MultiPolygon(g) => Shape::MultiPolygon(g.into()),
            geo::Geometry::Line(_) => return Err(unsupported("Line")),
            geo::Geometry::GeometryCollection(_) => {
                return Err(unsupported("GeometryCollection"))
            }
            geo::Geometry::Rect(_) => return Err(unsupported("Rect")),
            geo::Geometry::Triangle(_) => return Err(unsupported("Triangle")),
        };
        Ok(shape)
    }
}

fn unsupported(name: &'static str) -> GeoTurfError {
    GeoTurfError::IncorrectGeometryType(Cow::Owned(format!(
        "{name} has no shape counterpart"
    )))
}
