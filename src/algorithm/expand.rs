use crate::algorithm::{destination, extent};
use crate::bbox::{BoundingBox, BoundsBuilder};
use crate::geometry::PointSequence;
use crate::units::Unit;

/// The extent of all shapes, grown by `distance` on every side.
///
/// The south-west corner is moved west and south, the north-east corner east and north,
/// each along a great circle with [`destination`]; the result is the extent of the four
/// moved points. Boxes spanning the antimeridian are not supported.
///
/// With no points at all the [`BoundingBox::infinite`] sentinel is returned unchanged.
pub fn expand(distance: f64, unit: Unit, shapes: &[&dyn PointSequence]) -> BoundingBox {
    let bbox = extent(shapes);
    if bbox.is_empty() {
        log::debug!("expand: nothing to expand, shapes have no points");
        return bbox;
    }

    let south_west = bbox.south_west();
    let north_east = bbox.north_east();
    let corners = [
        destination(&south_west, distance, -90.0, unit),
        destination(&south_west, distance, 180.0, unit),
        destination(&north_east, distance, 90.0, unit),
        destination(&north_east, distance, 0.0, unit),
    ];

    let mut bounds = BoundsBuilder::new();
    for corner in &corners {
        bounds.add_point(corner);
    }
    bounds.finish()
}
