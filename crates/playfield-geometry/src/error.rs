//! Error types for the geometry library.
//!
//! The collision predicates never fail; these errors are only produced by the
//! checked constructors.

use core::fmt;

/// Errors returned when constructing geometry from untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Error for malformed box corners.
    /// This variant is returned when `min` exceeds `max` on an axis or a corner is NaN.
    InvalidBounds(&'static str),
    /// Error for invalid circle radius.
    /// This variant is returned when a radius is negative or NaN.
    InvalidRadius(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidBounds(msg) => write!(f, "Invalid box bounds: {}", msg),
            GeometryError::InvalidRadius(msg) => write!(f, "Invalid radius: {}", msg),
        }
    }
}

impl core::error::Error for GeometryError {}
