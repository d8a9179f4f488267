//! Points and the shapes built out of them.
//!
//! Every operation in this crate consumes geometries through one capability: producing an
//! ordered sequence of points ([`PointSequence`]). Lines and polygons yield their vertices
//! in order, multi-geometries concatenate their children in declaration order.

mod from_geo;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
mod shape;

pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
pub use shape::Shape;

/// Anything that can be flattened into an ordered sequence of [`Point`]s.
///
/// This is the only capability the measurement and extent algorithms need from a geometry,
/// so external geometry types can take part by implementing it.
pub trait PointSequence {
    /// Iterate over every point of the geometry, in order.
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_>;

    /// Collect the flattened point sequence.
    fn to_points(&self) -> Vec<Point> {
        self.points().copied().collect()
    }
}
