use crate::geometry::{Point, PointSequence, Polygon};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }
}

impl PointSequence for MultiPolygon {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(
            self.0
                .iter()
                .flat_map(|polygon| polygon.0.iter())
                .flat_map(|ring| ring.0.iter()),
        )
    }
}
