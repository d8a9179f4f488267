//! Distances, bearings, destinations, extents and line containment on a spherical earth.
//!
//! Coordinates are latitude/longitude pairs in degrees. Distances use the haversine formula
//! with an earth radius attached to each [`Unit`][units::Unit], and bounding boxes are
//! plain longitude/latitude rectangles that do not wrap around the antimeridian.
//!
//! ```
//! use geoturf::algorithm::{bearing, distance};
//! use geoturf::geometry::Point;
//! use geoturf::units::{bearing_to_angle, Unit};
//!
//! let from = Point::new(39.984, -75.343);
//! let to = Point::new(39.123, -75.534);
//!
//! let miles = distance(&from, &to, Unit::Miles);
//! let compass = bearing_to_angle(bearing(&from, &to));
//! assert!((miles - 60.372).abs() < 1e-3);
//! assert!((compass - 189.767).abs() < 1e-3);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod bbox;
pub mod error;
pub mod float;
pub mod geometry;
#[cfg(test)]
pub(crate) mod test;
pub mod units;

pub use bbox::BoundingBox;
pub use error::{GeoTurfError, Result};
pub use geometry::{Point, PointSequence, Shape};
pub use units::Unit;
