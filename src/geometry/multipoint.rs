use crate::geometry::{Point, PointSequence};

/// An unordered collection of points. Flattening keeps the stored order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<Point>> From<Vec<P>> for MultiPoint {
    fn from(points: Vec<P>) -> Self {
        Self(points.into_iter().map(Into::into).collect())
    }
}

impl PointSequence for MultiPoint {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.0.iter())
    }
}
