//! Completed-row clearing for block-stacking grids, read under
//! [`CellRule::Occupancy`].

use tracing::debug;

use crate::grid::{CellRule, EMPTY};

fn is_complete(row: &[i32]) -> bool {
    // A zero-width row has no cells to fill.
    !row.is_empty() && row.iter().all(|&value| !CellRule::Occupancy.is_open(value))
}

/// Indices, top to bottom, of the rows in which every cell is occupied.
pub fn completed_rows(grid: &[Vec<i32>]) -> Vec<usize> {
    grid.iter()
        .enumerate()
        .filter(|(_, row)| is_complete(row))
        .map(|(index, _)| index)
        .collect()
}

/// Removes every completed row and shifts the rows above it down.
///
/// An all-empty row is inserted at the top for each removed row, so the grid
/// keeps its row count. The inserted rows take the width of row 0 as it was
/// before clearing, or 0 when every row was cleared. The relative order of the
/// remaining rows is preserved.
///
/// # Returns
///
/// The number of rows cleared.
pub fn clear_completed_rows(grid: &mut Vec<Vec<i32>>) -> usize {
    let mut width = grid.first().map_or(0, Vec::len);
    let height = grid.len();

    grid.retain(|row| !is_complete(row));
    let cleared = height - grid.len();
    if cleared == 0 {
        return 0;
    }
    if grid.is_empty() {
        width = 0;
    }

    let mut rows = vec![vec![EMPTY; width]; cleared];
    rows.append(grid);
    *grid = rows;
    debug!(cleared, width, height, "Cleared completed rows");
    cleared
}
