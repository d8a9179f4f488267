//! Units of measure and conversions between angular and linear distances on a spherical earth.
//!
//! Every linear [`Unit`] is tied to the angular world through a single constant: the earth
//! radius expressed in that unit. A distance of `d` units covers `d / factor` radians of arc.

use std::f64::consts::PI;
use std::fmt::Display;
use std::str::FromStr;

use phf::phf_map;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeoTurfError, Result};

/// A unit of distance (and, for most variants, of area).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    Kilometers,
    Miles,
    Meters,
    Centimeters,
    /// Degrees of arc along a great circle.
    Degrees,
    /// Radians of arc along a great circle.
    Radians,
    NauticalMiles,
    Inches,
    Yards,
    Feet,
}

/// Names accepted by [`Unit::from_str`], including the short forms.
static UNIT_NAMES: phf::Map<&'static str, Unit> = phf_map! {
    "kilometers" => Unit::Kilometers,
    "kilometres" => Unit::Kilometers,
    "km" => Unit::Kilometers,
    "miles" => Unit::Miles,
    "mi" => Unit::Miles,
    "meters" => Unit::Meters,
    "metres" => Unit::Meters,
    "m" => Unit::Meters,
    "centimeters" => Unit::Centimeters,
    "centimetres" => Unit::Centimeters,
    "cm" => Unit::Centimeters,
    "degrees" => Unit::Degrees,
    "deg" => Unit::Degrees,
    "d" => Unit::Degrees,
    "radians" => Unit::Radians,
    "rad" => Unit::Radians,
    "r" => Unit::Radians,
    "nauticalmiles" => Unit::NauticalMiles,
    "nm" => Unit::NauticalMiles,
    "inches" => Unit::Inches,
    "in" => Unit::Inches,
    "yards" => Unit::Yards,
    "yd" => Unit::Yards,
    "feet" => Unit::Feet,
    "ft" => Unit::Feet,
};

impl Unit {
    /// Every unit, in declaration order.
    pub const ALL: [Unit; 10] = [
        Unit::Kilometers,
        Unit::Miles,
        Unit::Meters,
        Unit::Centimeters,
        Unit::Degrees,
        Unit::Radians,
        Unit::NauticalMiles,
        Unit::Inches,
        Unit::Yards,
        Unit::Feet,
    ];

    /// The earth radius expressed in this unit.
    pub const fn factor(&self) -> f64 {
        match self {
            Unit::Kilometers => 6373.0,
            Unit::Miles => 3960.0,
            Unit::Meters => 6373000.0,
            Unit::Centimeters => 6.373e8,
            Unit::Degrees => 57.2957795,
            Unit::Radians => 1.0,
            Unit::NauticalMiles => 3441.145,
            Unit::Inches => 250905600.0,
            Unit::Yards => 6969600.0,
            Unit::Feet => 20908792.65,
        }
    }

    /// Number of square units in one square meter, or `None` when the unit has no area
    /// interpretation.
    pub const fn area_factor(&self) -> Option<f64> {
        match self {
            Unit::Kilometers => Some(0.000001),
            Unit::Miles => Some(3.86e-7),
            Unit::Meters => Some(1.0),
            Unit::Centimeters => Some(10000.0),
            Unit::Inches => Some(1550.003100006),
            Unit::Yards => Some(1.195990046),
            Unit::Feet => Some(10.763910417),
            Unit::Degrees | Unit::Radians | Unit::NauticalMiles => None,
        }
    }

    /// The canonical lowercase name of this unit.
    pub const fn name(&self) -> &'static str {
        match self {
            Unit::Kilometers => "kilometers",
            Unit::Miles => "miles",
            Unit::Meters => "meters",
            Unit::Centimeters => "centimeters",
            Unit::Degrees => "degrees",
            Unit::Radians => "radians",
            Unit::NauticalMiles => "nauticalmiles",
            Unit::Inches => "inches",
            Unit::Yards => "yards",
            Unit::Feet => "feet",
        }
    }
}

impl FromStr for Unit {
    type Err = GeoTurfError;

    fn from_str(s: &str) -> Result<Self> {
        match UNIT_NAMES.get(s.trim().to_ascii_lowercase().as_str()) {
            Some(unit) => Ok(*unit),
            None => {
                log::debug!("unrecognised unit name {s:?}");
                Err(GeoTurfError::InvalidUnit(s.to_string()))
            }
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert an angle in degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert an angle in radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert a distance along the earth's surface into radians of arc.
pub fn distance_to_radians(distance: f64, unit: Unit) -> f64 {
    distance / unit.factor()
}

/// Convert radians of arc into a distance along the earth's surface.
pub fn radians_to_distance(radians: f64, unit: Unit) -> f64 {
    radians * unit.factor()
}

/// Convert a distance along the earth's surface into degrees of arc.
pub fn distance_to_degrees(distance: f64, unit: Unit) -> f64 {
    radians_to_degrees(distance_to_radians(distance, unit))
}

/// Convert a distance from one unit to another.
///
/// ```
/// use geoturf::units::{convert_distance, Unit};
///
/// let km = convert_distance(1000.0, Unit::Meters, Unit::Kilometers);
/// assert!((km - 1.0).abs() < 1e-12);
/// ```
pub fn convert_distance(distance: f64, from: Unit, to: Unit) -> f64 {
    radians_to_distance(distance_to_radians(distance, from), to)
}

/// Convert an area from one unit to another.
///
/// Fails for negative areas and for units without an area interpretation (degrees, radians
/// and nautical miles).
pub fn convert_area(area: f64, from: Unit, to: Unit) -> Result<f64> {
    if area < 0.0 {
        return Err(GeoTurfError::NegativeArea(area));
    }
    let from_factor = from
        .area_factor()
        .ok_or_else(|| GeoTurfError::InvalidUnit(from.to_string()))?;
    let to_factor = to
        .area_factor()
        .ok_or_else(|| GeoTurfError::InvalidUnit(to.to_string()))?;
    Ok((area / from_factor) * to_factor)
}

/// Normalise any bearing into a compass angle in `[0, 360)`.
pub fn bearing_to_angle(bearing: f64) -> f64 {
    let mut angle = bearing % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // A tiny negative remainder rounds up to a full turn
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}
