#![warn(missing_docs)]
//! Grid algorithms over caller-owned integer grids.
//!
//! Every algorithm borrows a rectangular grid stored as rows of `i32`
//! (`grid[y][x]`) and reads its cells under its own convention, see
//! [`CellRule`]:
//!
//! * [`flood_fill`] treats every value as a fillable colour,
//! * [`find_path`] treats `0` as walkable and anything else as blocked,
//! * [`clear_completed_rows`] treats `0` as empty and anything else as occupied.
//!
//! Nothing is retained between calls. Mutating algorithms take `&mut` access
//! to the grid for the duration of the call only.

pub mod error;
pub mod flood_fill;
pub mod grid;
pub mod pathfinding;
pub mod row_clear;

pub use error::GridError;
pub use flood_fill::{connected_region, flood_fill};
pub use grid::{CellRule, Grid, GridDimensions, GridOverlay};
pub use pathfinding::{PathResult, find_path, find_path_detailed, manhattan_distance};
pub use row_clear::{clear_completed_rows, completed_rows};

pub use playfield_geometry::GridCoordinate;
