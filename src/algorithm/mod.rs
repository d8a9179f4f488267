//! Spherical measurement and containment algorithms.
//!
//! All functions are pure: they read their inputs and return a fresh result.

mod along;
mod bearing;
mod center;
mod destination;
mod distance;
mod expand;
mod extent;
mod length;
mod overlap;
mod point_on_line;
mod surround;

pub use along::along;
pub use bearing::bearing;
pub use center::{center, Center};
pub use destination::destination;
pub use distance::distance;
pub use expand::expand;
pub use extent::{extent, Extent};
pub use length::HaversineLength;
pub use overlap::{overlap, overlap_bounds};
pub use point_on_line::{is_point_on_line, is_point_on_segment, Boundary};
pub use surround::{surround, translate};
