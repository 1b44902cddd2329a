//! This module defines the error types used by the `gridway-navigation` crate.

#![warn(missing_docs)]

/// Error type for occupancy grid operations.
///
/// This enum encapsulates all possible errors that can occur while building
/// or accessing a grid, such as invalid dimensions or out-of-bounds access.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when grid width or height is zero, or when
    /// the total cell count would overflow.
    InvalidDimensions(&'static str),
    /// Error for out-of-bounds access.
    /// This variant is returned when attempting to access cells outside the
    /// valid range.
    OutOfBounds(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
            GridError::OutOfBounds(msg) => write!(f, "Grid access out of bounds: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
