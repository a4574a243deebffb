//! Shared grid helpers: dimensions, bounds checks, cell conventions, parsing
//! and text rendering.
//!
//! Grids are plain `Vec<Vec<i32>>` owned by the caller. The algorithms only
//! look at the width of row 0 and assume every other row matches it; call
//! [`validate`] first when that is not already guaranteed.

use std::collections::HashSet;
use std::fmt;

use playfield_geometry::GridCoordinate;

use crate::error::GridError;

/// Row-major grid of cell values, indexed `grid[y][x]`.
pub type Grid = Vec<Vec<i32>>;

/// Value of an empty or walkable cell.
pub const EMPTY: i32 = 0;

/// How an algorithm interprets cell values.
///
/// The same storage means different things to different algorithms; this
/// names each reading instead of leaving it implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    /// Every value is a colour; regions are cells sharing one value (flood fill).
    Colour,
    /// `0` is walkable, any other value is an obstacle (pathfinding).
    Obstacle,
    /// `0` is empty, any other value is occupied (row clearing).
    Occupancy,
}

impl CellRule {
    /// Returns `true` if a cell holding `value` is open under this rule:
    /// walkable for [`CellRule::Obstacle`], empty for [`CellRule::Occupancy`].
    /// Every cell is open under [`CellRule::Colour`].
    pub const fn is_open(self, value: i32) -> bool {
        match self {
            CellRule::Colour => true,
            CellRule::Obstacle | CellRule::Occupancy => value == EMPTY,
        }
    }
}

/// Width and height of a non-empty grid, in cells. Both are always non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    width: usize,
    height: usize,
}

impl GridDimensions {
    /// Returns `None` if either side is zero.
    pub const fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `p` lies inside the grid.
    pub fn contains(&self, p: GridCoordinate) -> bool {
        self.index_of(p).is_some()
    }

    /// Row-major index (`y * width + x`) of `p`, or `None` if it is out of bounds.
    pub fn index_of(&self, p: GridCoordinate) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Inverse of [`GridDimensions::index_of`] for indices below [`GridDimensions::len`].
    pub fn coordinate_of(&self, index: usize) -> GridCoordinate {
        GridCoordinate::new((index % self.width) as i32, (index / self.width) as i32)
    }
}

/// Dimensions of `grid` taken from its row count and the width of row 0.
///
/// Returns `None` for a grid with no rows or a zero-width first row.
pub fn dimensions(grid: &[Vec<i32>]) -> Option<GridDimensions> {
    GridDimensions::new(grid.first()?.len(), grid.len())
}

/// Checks that `grid` is non-empty and rectangular.
///
/// # Errors
///
/// * `GridError::Empty` if there are no rows or row 0 has no cells.
/// * `GridError::RaggedRows` for the first row whose width differs from row 0.
pub fn validate(grid: &[Vec<i32>]) -> Result<GridDimensions, GridError> {
    let dims = dimensions(grid).ok_or(GridError::Empty("grid has no cells"))?;
    if let Some((row, cells)) = grid.iter().enumerate().find(|(_, cells)| cells.len() != dims.width) {
        return Err(GridError::RaggedRows {
            row,
            expected: dims.width,
            found: cells.len(),
        });
    }
    Ok(dims)
}

/// Parses a grid from text, one row per non-blank line.
///
/// Tokens are separated by whitespace and are either integers or runs of
/// `#` (occupied, `1`) and `.` (empty, `0`), so both `0 1 0` and `.#.`
/// describe the same row.
///
/// # Errors
///
/// * `GridError::InvalidCell` for a token that is neither an integer nor a `#`/`.` run.
/// * `GridError::Empty` / `GridError::RaggedRows` as in [`validate`].
pub fn parse(text: &str) -> Result<Grid, GridError> {
    let mut grid = Grid::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let row_index = grid.len();
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            if token.chars().all(|c| c == '#' || c == '.') {
                row.extend(token.chars().map(|c| if c == '#' { 1 } else { EMPTY }));
            } else {
                let value = token.parse::<i32>().map_err(|_| GridError::InvalidCell {
                    row: row_index,
                    column: row.len(),
                })?;
                row.push(value);
            }
        }
        grid.push(row);
    }
    validate(&grid)?;
    Ok(grid)
}

/// Text rendering of a grid with an optional path drawn over it.
///
/// Cells render as `S` (path start), `G` (path end), `*` (path), `#`
/// (blocked under [`CellRule::Obstacle`]) or `.`, separated by spaces.
pub struct GridOverlay<'a> {
    grid: &'a [Vec<i32>],
    path: &'a [GridCoordinate],
}

impl<'a> GridOverlay<'a> {
    /// Renders `grid` without a path.
    pub fn new(grid: &'a [Vec<i32>]) -> Self {
        Self { grid, path: &[] }
    }

    /// Draws `path` over the grid.
    pub fn with_path(mut self, path: &'a [GridCoordinate]) -> Self {
        self.path = path;
        self
    }
}

impl fmt::Display for GridOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_path: HashSet<GridCoordinate> = self.path.iter().copied().collect();
        let start = self.path.first().copied();
        let goal = self.path.last().copied();

        for (y, row) in self.grid.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let p = GridCoordinate::new(x as i32, y as i32);
                let symbol = if Some(p) == start {
                    'S'
                } else if Some(p) == goal {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else if !CellRule::Obstacle.is_open(value) {
                    '#'
                } else {
                    '.'
                };
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
