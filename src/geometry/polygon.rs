use crate::geometry::{LineString, Point, PointSequence};

/// A polygon made of rings: the first ring is the exterior, any further rings are holes.
///
/// Flattening yields every ring's vertices in ring order, exterior first; holes are not
/// treated specially.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon(pub Vec<LineString>);

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        let mut rings = Vec::with_capacity(interiors.len() + 1);
        rings.push(exterior);
        rings.extend(interiors);
        Self(rings)
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.0.first()
    }

    pub fn interiors(&self) -> &[LineString] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn rings(&self) -> &[LineString] {
        &self.0
    }
}

impl From<Vec<LineString>> for Polygon {
    fn from(rings: Vec<LineString>) -> Self {
        Self(rings)
    }
}

impl PointSequence for Polygon {
    fn points(&self) -> Box<dyn Iterator<Item = &Point> + '_> {
        Box::new(self.0.iter().flat_map(|ring| ring.0.iter()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rings() {
        let exterior = LineString::from(vec![(0.0, 100.0), (0.0, 101.0), (1.0, 101.0)]);
        let hole = LineString::from(vec![(0.2, 100.2), (0.2, 100.8), (0.8, 100.8)]);
        let polygon = Polygon::new(exterior.clone(), vec![hole.clone()]);

        assert_eq!(polygon.exterior(), Some(&exterior));
        assert_eq!(polygon.interiors(), &[hole]);
        assert_eq!(polygon.to_points().len(), 6);
        assert_eq!(polygon.to_points()[3], Point::new(0.2, 100.2));
    }

    #[test]
    fn empty() {
        let polygon = Polygon::default();
        assert!(polygon.exterior().is_none());
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.points().count(), 0);
    }
}
