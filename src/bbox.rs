//! Axis-aligned bounding boxes in longitude/latitude space.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeoTurfError, Result};
use crate::geometry::{Point, PointSequence};

/// A box given by its west, south, east and north edges, in degrees.
///
/// West and east are longitudes, south and north latitudes. A populated box has
/// `west <= east` and `south <= north`; boxes crossing the antimeridian are not
/// represented.
///
/// The [`Default`] box is the empty sentinel returned by
/// [`BoundingBox::infinite`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// The "no extent" box: west and south at `+∞`, east and north at `-∞`.
    ///
    /// Any real point tightens all four edges of this box, which makes it the seed of an
    /// extent computation. It is not a usable box in itself.
    pub const fn infinite() -> Self {
        Self {
            west: f64::INFINITY,
            south: f64::INFINITY,
            east: f64::NEG_INFINITY,
            north: f64::NEG_INFINITY,
        }
    }

    /// `true` for a box that contains no point, such as [`BoundingBox::infinite`].
    pub fn is_empty(&self) -> bool {
        !(self.west <= self.east && self.south <= self.north)
    }

    pub fn south_west(&self) -> Point {
        Point::new(self.south, self.west)
    }

    pub fn north_east(&self) -> Point {
        Point::new(self.north, self.east)
    }

    /// The midpoint of both axes. This is an arithmetic mean, not a spherical centroid.
    pub fn center(&self) -> Point {
        Point::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    /// `true` if the boxes share at least one point. Touching edges count as overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        // other is left of self
        if self.west > other.east {
            return false;
        }
        // other is right of self
        if self.east < other.west {
            return false;
        }
        // other is above self
        if self.north < other.south {
            return false;
        }
        // other is below self
        if self.south > other.north {
            return false;
        }
        true
    }

    /// `true` if the point lies inside the box or on its edges.
    pub fn contains_point(&self, point: &Point) -> bool {
        self.west <= point.lng
            && point.lng <= self.east
            && self.south <= point.lat
            && point.lat <= self.north
    }

    /// The bounds in `[west, south, east, north]` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::infinite()
    }
}

/// `[west, south, east, north]`
impl From<[f64; 4]> for BoundingBox {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

/// Loose bounds in `[west, south, east, north]` order.
impl TryFrom<&[f64]> for BoundingBox {
    type Error = GeoTurfError;

    fn try_from(value: &[f64]) -> Result<Self> {
        match value {
            [] => Err(GeoTurfError::NilInput("bbox can't be empty".into())),
            [west, south, east, north] => Ok(Self::new(*west, *south, *east, *north)),
            _ => Err(GeoTurfError::InvalidBox(format!(
                "expected 4 bounds, got {}",
                value.len()
            ))),
        }
    }
}

/// `geo::Rect` always orders its corners, so an inverted box (the
/// [`BoundingBox::infinite`] sentinel, or one with `west > east`) comes back with its edges
/// swapped. Check [`BoundingBox::is_empty`] before converting.
impl From<BoundingBox> for geo::Rect {
    fn from(value: BoundingBox) -> Self {
        geo::Rect::new(
            geo::coord! { x: value.west, y: value.south },
            geo::coord! { x: value.east, y: value.north },
        )
    }
}

impl From<geo::Rect> for BoundingBox {
    fn from(value: geo::Rect) -> Self {
        Self::new(value.min().x, value.min().y, value.max().x, value.max().y)
    }
}

/// Accumulates points into the smallest box containing all of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsBuilder {
    bounds: Option<BoundingBox>,
}

impl BoundsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: &Point) {
        let bounds = self
            .bounds
            .get_or_insert(BoundingBox::new(point.lng, point.lat, point.lng, point.lat));
        if point.lng < bounds.west {
            bounds.west = point.lng;
        }
        if point.lat < bounds.south {
            bounds.south = point.lat;
        }
        if point.lng > bounds.east {
            bounds.east = point.lng;
        }
        if point.lat > bounds.north {
            bounds.north = point.lat;
        }
    }

    pub fn add_points(&mut self, geom: &(impl PointSequence + ?Sized)) {
        for point in geom.points() {
            self.add_point(point);
        }
    }

    /// The accumulated box, or `None` if no point was added.
    pub fn build(self) -> Option<BoundingBox> {
        self.bounds
    }

    /// The accumulated box, or [`BoundingBox::infinite`] if no point was added.
    pub fn finish(self) -> BoundingBox {
        self.bounds.unwrap_or_default()
    }
}
