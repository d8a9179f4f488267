use crate::geometry::{LineString, Point};

/// Which endpoints of a segment are excluded from containment.
///
/// "Start" and "end" follow the segment's direction of travel, not the sign of its
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Both endpoints count as on the segment.
    #[default]
    None,
    /// The first endpoint is excluded.
    Start,
    /// The last endpoint is excluded.
    End,
    /// Both endpoints are excluded.
    Both,
}

impl Boundary {
    /// The policy for segment `index` of a line with `num_segments` segments.
    fn for_segment(index: usize, num_segments: usize, ignore_end_vertices: bool) -> Self {
        if !ignore_end_vertices {
            return Boundary::None;
        }
        let first = index == 0;
        let last = index + 1 == num_segments;
        match (first, last) {
            (true, true) => Boundary::Both,
            (true, false) => Boundary::Start,
            (false, true) => Boundary::End,
            (false, false) => Boundary::None,
        }
    }
}

/// `true` if `point` lies exactly on one of the segments of `line`.
///
/// With `ignore_end_vertices`, the first and last vertices of the line are not considered
/// on the line, unless the same coordinate also appears as an interior vertex. Lines with
/// fewer than two vertices contain nothing.
///
/// # Examples
///
/// ```
/// use geoturf::algorithm::is_point_on_line;
/// use geoturf::geometry::{LineString, Point};
///
/// let line = LineString::from(vec![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0)]);
/// assert!(is_point_on_line(&Point::new(0.0, 1.0), &line, false));
/// assert!(is_point_on_line(&Point::new(0.0, 0.0), &line, false));
/// assert!(!is_point_on_line(&Point::new(0.0, 0.0), &line, true));
/// ```
pub fn is_point_on_line(point: &Point, line: &LineString, ignore_end_vertices: bool) -> bool {
    let num_segments = line.num_segments();
    line.segments().enumerate().any(|(i, (start, end))| {
        let boundary = Boundary::for_segment(i, num_segments, ignore_end_vertices);
        is_point_on_segment(start, end, point, boundary)
    })
}

/// `true` if `point` lies exactly on the segment from `start` to `end`.
///
/// The point must be collinear with the segment (a zero cross product) and fall within its
/// span on the axis along which the segment extends the furthest.
pub fn is_point_on_segment(start: &Point, end: &Point, point: &Point, boundary: Boundary) -> bool {
    let (x, y) = (point.lng, point.lat);
    let (x1, y1) = (start.lng, start.lat);
    let (x2, y2) = (end.lng, end.lat);

    let dxc = x - x1;
    let dyc = y - y1;
    let dxl = x2 - x1;
    let dyl = y2 - y1;

    // A zero-length segment only holds its own vertex
    if dxl == 0.0 && dyl == 0.0 {
        return boundary == Boundary::None && dxc == 0.0 && dyc == 0.0;
    }

    let cross = dxc * dyl - dyc * dxl;
    if cross != 0.0 {
        return false;
    }

    let (lo, v, hi, forward) = if dxl.abs() >= dyl.abs() {
        (x1, x, x2, dxl > 0.0)
    } else {
        (y1, y, y2, dyl > 0.0)
    };
    within(lo, v, hi, forward, boundary)
}

/// Checks `value` against the span from `from` to `to`, which runs in the positive
/// direction when `forward` is set.
fn within(from: f64, value: f64, to: f64, forward: bool, boundary: Boundary) -> bool {
    let (exclude_from, exclude_to) = match boundary {
        Boundary::None => (false, false),
        Boundary::Start => (true, false),
        Boundary::End => (false, true),
        Boundary::Both => (true, true),
    };
    let after_from = if exclude_from {
        if forward {
            from < value
        } else {
            value < from
        }
    } else if forward {
        from <= value
    } else {
        value <= from
    };
    let before_to = if exclude_to {
        if forward {
            value < to
        } else {
            to < value
        }
    } else if forward {
        value <= to
    } else {
        to <= value
    };
    after_from && before_to
}
