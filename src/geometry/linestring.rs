use itertools::Itertools;

use crate::geometry::{Point, PointSequence};

/// An ordered sequence of vertices joined by great-circle segments.
///
/// A line string may hold any number of vertices, including none.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Point>);

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// The number of segments, one less than the number of vertices.
    pub fn num_segments(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Consecutive vertex pairs, in order.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.0.iter().tuple_windows()
    }
}

impl<P: Into<Point>> From<Vec<P>> for LineString {
    fn from(points: Vec<P>) -> Self {
        Self(points.into_iter().map(Into::into).collect())
    }
}

impl PointSequence for LineString {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.0.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn segments() {
        let line = LineString::from(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]);
        assert_eq!(line.num_segments(), 2);
        let segments: Vec<_> = line.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], (&Point::new(1.0, 1.0), &Point::new(2.0, 0.0)));
    }

    #[test]
    fn degenerate_lines() {
        assert_eq!(LineString::default().num_segments(), 0);
        assert_eq!(LineString::default().segments().count(), 0);

        let single = LineString::from(vec![(1.0, 1.0)]);
        assert_eq!(single.num_segments(), 0);
        assert_eq!(single.first(), single.last());
    }
}
