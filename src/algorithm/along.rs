use crate::algorithm::{bearing, destination, distance};
use crate::error::{GeoTurfError, Result};
use crate::geometry::{LineString, Point};
use crate::units::Unit;

/// The point `distance` along a line, measured from its first vertex.
///
/// Segment lengths are haversine distances. Once the target falls inside a segment, the
/// point is found with [`destination`] from the vertex ending that segment, travelling back
/// towards the segment start by the overshoot.
///
/// - A `distance` of zero (or less) returns the first vertex.
/// - A `distance` beyond the line length returns the last vertex.
///
/// Fails if the line has no vertices.
pub fn along(line: &LineString, distance: f64, unit: Unit) -> Result<Point> {
    let points = &line.0;
    let last = points
        .len()
        .checked_sub(1)
        .ok_or(GeoTurfError::NilInput("line string can't be empty".into()))?;

    let mut travelled = 0.0;
    for (i, point) in points.iter().enumerate() {
        if distance >= travelled && i == last {
            log::trace!("along: {distance} {unit} is past the end of the line");
            return Ok(*point);
        } else if travelled >= distance {
            let overshot = distance - travelled;
            if overshot == 0.0 || i == 0 {
                return Ok(*point);
            }
            let direction = bearing(point, &points[i - 1]) - 180.0;
            return Ok(destination(point, overshot, direction, unit));
        } else if i == last {
            // NaN distances compare false both ways
            return Ok(*point);
        } else {
            travelled += self::distance(point, &points[i + 1], unit);
        }
    }

    // The last vertex always returns above
    Ok(points[last])
}
