//! This module defines the error types used by the `playfield-grid` crate.

#![warn(missing_docs)]

/// Error type for grid validation and parsing.
///
/// The algorithms themselves never fail. These errors come from the opt-in
/// helpers in [`crate::grid`] that check or build grids from untrusted input.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for a grid without cells.
    /// This variant is returned when a grid has no rows or a zero-width first row.
    Empty(&'static str),
    /// Error for rows of differing length.
    RaggedRows {
        /// Index of the first offending row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// Error for a token that is not a cell value.
    InvalidCell {
        /// Row of the token (0-based, blank lines skipped).
        row: usize,
        /// Column of the token (0-based).
        column: usize,
    },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::Empty(msg) => write!(f, "Empty grid: {}", msg),
            GridError::RaggedRows { row, expected, found } => write!(
                f,
                "Ragged grid: row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::InvalidCell { row, column } => {
                write!(f, "Invalid cell value at row {}, column {}", row, column)
            }
        }
    }
}

impl core::error::Error for GridError {}
