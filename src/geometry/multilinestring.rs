use crate::geometry::{LineString, Point, PointSequence};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[LineString] {
        &self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(lines: Vec<LineString>) -> Self {
        Self(lines)
    }
}

impl PointSequence for MultiLineString {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.0.iter().flat_map(|line| line.0.iter()))
    }
}
