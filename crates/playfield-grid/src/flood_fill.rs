//! Breadth-first flood fill under [`CellRule::Colour`](crate::CellRule::Colour).

use std::collections::VecDeque;

use playfield_geometry::GridCoordinate;
use tracing::debug;

use crate::grid::{GridDimensions, dimensions};

/// Replaces the 4-connected region around `(start_x, start_y)` with `new_value`.
///
/// The region is every cell reachable from the start through up/down/left/right
/// steps that holds the start cell's original value. The grid is modified in
/// place.
///
/// # Returns
///
/// The number of cells changed. `0` if the grid is empty, the start is out of
/// bounds, or the start cell already holds `new_value`.
pub fn flood_fill(grid: &mut [Vec<i32>], start_x: i32, start_y: i32, new_value: i32) -> usize {
    let Some(dims) = dimensions(grid) else {
        return 0;
    };
    let start = GridCoordinate::new(start_x, start_y);
    let Some(start_cell) = cell_mut(grid, &dims, start) else {
        return 0;
    };
    let old_value = *start_cell;
    if old_value == new_value {
        return 0;
    }

    // Cells are recoloured as they are queued, so each enters the queue once.
    *start_cell = new_value;
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut filled = 1;

    while let Some(current) = queue.pop_front() {
        for neighbor in current.neighbors() {
            if let Some(cell) = cell_mut(grid, &dims, neighbor) {
                if *cell == old_value {
                    *cell = new_value;
                    filled += 1;
                    queue.push_back(neighbor);
                }
            }
        }
    }

    debug!(start = %start, old_value, new_value, filled, "Flood fill complete");
    filled
}

/// Cells of the 4-connected region around `start` sharing its value, in
/// breadth-first order starting with `start`. The grid is not modified.
///
/// Returns an empty vector if the grid is empty or `start` is out of bounds.
pub fn connected_region(grid: &[Vec<i32>], start: GridCoordinate) -> Vec<GridCoordinate> {
    let Some(dims) = dimensions(grid) else {
        return Vec::new();
    };
    let (Some(start_index), Some(value)) = (dims.index_of(start), cell(grid, start)) else {
        return Vec::new();
    };

    let mut visited = vec![false; dims.len()];
    visited[start_index] = true;

    // The output doubles as the BFS queue; `head` is the next cell to expand.
    let mut region = vec![start];
    let mut head = 0;
    while head < region.len() {
        let current = region[head];
        head += 1;
        for neighbor in current.neighbors() {
            let Some(index) = dims.index_of(neighbor) else {
                continue;
            };
            if !visited[index] && cell(grid, neighbor) == Some(value) {
                visited[index] = true;
                region.push(neighbor);
            }
        }
    }
    region
}

fn cell(grid: &[Vec<i32>], p: GridCoordinate) -> Option<i32> {
    grid.get(usize::try_from(p.y).ok()?)?
        .get(usize::try_from(p.x).ok()?)
        .copied()
}

fn cell_mut<'a>(grid: &'a mut [Vec<i32>], dims: &GridDimensions, p: GridCoordinate) -> Option<&'a mut i32> {
    if !dims.contains(p) {
        return None;
    }
    grid.get_mut(p.y as usize)?.get_mut(p.x as usize)
}
