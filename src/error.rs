//! Defines [`GeoTurfError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoTurfError {
    /// A required point, line or box was absent or empty.
    #[error("Missing input: {0}")]
    NilInput(Cow<'static, str>),

    /// A unit string did not resolve to a [`Unit`][crate::units::Unit], or the unit has no
    /// area factor.
    #[error("{0} is not a valid unit")]
    InvalidUnit(String),

    /// Loose bounds that do not hold exactly four values.
    #[error("Invalid bbox: {0}")]
    InvalidBox(String),

    /// Areas are never negative.
    #[error("Area can't be negative: {0}")]
    NegativeArea(f64),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(Cow<'static, str>),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoTurfError>;
