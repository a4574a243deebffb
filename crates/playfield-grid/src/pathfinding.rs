/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the grid
    g(n) = number of steps from start to n
    h(n) = Manhattan distance from n to the goal
    f(n) = estimated length of the shortest path through n

Manhattan distance never overestimates with unit-cost 4-directional moves,
so the first time the goal is popped its path is a shortest one.

The cost and predecessor tables are flat vectors indexed by the cell's
row-major index instead of hash maps keyed by position.

*/

//! A* shortest paths over grids read under [`CellRule::Obstacle`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use playfield_geometry::GridCoordinate;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{CellRule, GridDimensions, dimensions};

const NO_PREDECESSOR: usize = usize::MAX;

/// Represents the result of an A* search with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// The computed path from start to goal inclusive, if one was found.
    pub path: Option<Vec<GridCoordinate>>,
    /// The number of steps along the path.
    pub total_cost: Option<u32>,
    /// The number of nodes expanded during the search.
    pub nodes_explored: usize,
    /// The length of the path (number of cells).
    pub path_length: usize,
}

impl PathResult {
    /// Creates a new PathResult for a successful search.
    pub fn success(path: Vec<GridCoordinate>, total_cost: u32, nodes_explored: usize) -> Self {
        let path_length = path.len();
        Self {
            path: Some(path),
            total_cost: Some(total_cost),
            nodes_explored,
            path_length,
        }
    }

    /// Creates a new PathResult for a failed search.
    pub fn failure(nodes_explored: usize) -> Self {
        Self {
            path: None,
            total_cost: None,
            nodes_explored,
            path_length: 0,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the path if one was found.
    pub fn into_path(self) -> Option<Vec<GridCoordinate>> {
        self.path
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(_) => write!(
                f,
                "PathResult {{ success: true, path_length: {}, total_cost: {}, nodes_explored: {} }}",
                self.path_length,
                self.total_cost.unwrap_or(0),
                self.nodes_explored
            ),
            None => write!(
                f,
                "PathResult {{ success: false, nodes_explored: {} }}",
                self.nodes_explored
            ),
        }
    }
}

/// Calculates the Manhattan distance between two grid coordinates.
pub fn manhattan_distance(a: GridCoordinate, b: GridCoordinate) -> u32 {
    a.manhattan_distance(b)
}

/// Frontier entry. `index` is the cell's row-major index.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State {
    f: u32,
    h: u32,
    g: u32,
    index: usize,
}

// `BinaryHeap` is a max-heap, so the comparison is reversed to pop the
// lowest `f` first. Ties go to the entry closer to the goal, then to the
// lower row-major index, which keeps the returned path deterministic.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.index.cmp(&self.index))
            .then_with(|| self.g.cmp(&other.g))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walks the predecessor table back from `goal` and returns the path start-first.
fn reconstruct_path(dims: &GridDimensions, came_from: &[usize], goal: usize) -> Vec<GridCoordinate> {
    let mut path = vec![dims.coordinate_of(goal)];
    let mut current = goal;
    while came_from[current] != NO_PREDECESSOR {
        current = came_from[current];
        path.push(dims.coordinate_of(current));
    }
    path.reverse();
    path
}

/// Finds a shortest 4-directional path from `start` to `goal`.
///
/// Cells are read under [`CellRule::Obstacle`]: only `0` cells can be
/// entered. The start cell itself is never checked, so a blocked start is a
/// valid origin.
///
/// # Returns
///
/// The path from `start` to `goal` inclusive, or an empty vector if the grid
/// is empty, `start` is out of bounds, or `goal` cannot be reached.
pub fn find_path(grid: &[Vec<i32>], start: GridCoordinate, goal: GridCoordinate) -> Vec<GridCoordinate> {
    find_path_detailed(grid, start, goal)
        .into_path()
        .unwrap_or_default()
}

/// Same search as [`find_path`], also reporting the path cost and the number
/// of expanded nodes.
pub fn find_path_detailed(grid: &[Vec<i32>], start: GridCoordinate, goal: GridCoordinate) -> PathResult {
    let mut nodes_explored = 0;

    let Some(dims) = dimensions(grid) else {
        debug!("Pathfinding on an empty grid");
        return PathResult::failure(nodes_explored);
    };
    let Some(start_index) = dims.index_of(start) else {
        debug!(start = %start, "Pathfinding start is out of bounds");
        return PathResult::failure(nodes_explored);
    };
    // An out-of-bounds goal is never popped; the search exhausts the reachable area.
    let goal_index = dims.index_of(goal);

    let mut open_set = BinaryHeap::new();
    let mut g_score = vec![u32::MAX; dims.len()];
    let mut came_from = vec![NO_PREDECESSOR; dims.len()];

    g_score[start_index] = 0;
    let h = manhattan_distance(start, goal);
    open_set.push(State {
        f: h,
        h,
        g: 0,
        index: start_index,
    });

    while let Some(State { g, index: current, .. }) = open_set.pop() {
        if g > g_score[current] {
            // Superseded by a cheaper entry for the same cell.
            continue;
        }
        nodes_explored += 1;

        if Some(current) == goal_index {
            let path = reconstruct_path(&dims, &came_from, current);
            debug!(
                start = %start,
                goal = %goal,
                path_length = path.len(),
                nodes_explored,
                "Path found"
            );
            return PathResult::success(path, g, nodes_explored);
        }

        let position = dims.coordinate_of(current);
        trace!(position = %position, g, "Expanding node");

        for neighbor in position.neighbors() {
            let Some(neighbor_index) = dims.index_of(neighbor) else {
                continue;
            };
            if !is_walkable(grid, neighbor) {
                continue;
            }

            let tentative_g_score = g + 1; // Cost between adjacent cells is 1
            if tentative_g_score < g_score[neighbor_index] {
                came_from[neighbor_index] = current;
                g_score[neighbor_index] = tentative_g_score;
                let h = manhattan_distance(neighbor, goal);
                open_set.push(State {
                    f: tentative_g_score.saturating_add(h),
                    h,
                    g: tentative_g_score,
                    index: neighbor_index,
                });
            }
        }
    }

    debug!(start = %start, goal = %goal, nodes_explored, "No path found");
    PathResult::failure(nodes_explored)
}

fn is_walkable(grid: &[Vec<i32>], p: GridCoordinate) -> bool {
    grid.get(p.y as usize)
        .and_then(|row| row.get(p.x as usize))
        .is_some_and(|&value| CellRule::Obstacle.is_open(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridCoordinate {
        GridCoordinate::new(x, y)
    }

    fn assert_valid_path(grid: &[Vec<i32>], path: &[GridCoordinate], start: GridCoordinate, goal: GridCoordinate) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for pair in path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1, "{} -> {} is not a single step", pair[0], pair[1]);
        }
        for step in &path[1..] {
            assert_eq!(grid[step.y as usize][step.x as usize], 0, "{} is blocked", step);
        }
    }

    #[test]
    fn test_astar_simple_path() {
        let grid = vec![
            vec![0, 0, 0, 0, 1],
            vec![1, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 1],
            vec![0, 0, 0, 0, 0],
        ];
        let start = p(0, 0);
        let goal = p(4, 4);

        let path = find_path(&grid, start, goal);

        // (0,0) (1,0) (2,0) (2,1) (2,2) (1,2) (0,2) (0,3) (0,4) (1,4) (2,4) (3,4) (4,4)
        assert_eq!(path.len(), 13);
        assert_valid_path(&grid, &path, start, goal);
    }

    #[test]
    fn test_astar_open_grid_length_is_manhattan_plus_one() {
        let grid = vec![vec![0; 8]; 6];
        let cases = [(p(0, 0), p(7, 5)), (p(7, 0), p(0, 5)), (p(3, 2), p(3, 2)), (p(1, 4), p(6, 4))];
        for (start, goal) in cases {
            let path = find_path(&grid, start, goal);
            assert_eq!(path.len() as u32, manhattan_distance(start, goal) + 1);
            assert_valid_path(&grid, &path, start, goal);
        }
    }

    #[test]
    fn test_astar_no_path() {
        let grid = vec![
            vec![0, 1, 0],
            vec![0, 1, 0],
            vec![0, 1, 0],
        ];
        let path = find_path(&grid, p(0, 0), p(2, 0));
        assert!(path.is_empty());

        let result = find_path_detailed(&grid, p(0, 0), p(2, 0));
        assert!(!result.is_success());
        // Only the left column is reachable.
        assert_eq!(result.nodes_explored, 3);
    }

    #[test]
    fn test_astar_start_equals_goal() {
        let grid = vec![vec![0; 3]; 3];
        assert_eq!(find_path(&grid, p(1, 1), p(1, 1)), vec![p(1, 1)]);

        // A blocked start is still a valid origin.
        let blocked = vec![vec![0, 0], vec![0, 1]];
        assert_eq!(find_path(&blocked, p(1, 1), p(1, 1)), vec![p(1, 1)]);
    }

    #[test]
    fn test_astar_blocked_start_is_permitted() {
        let grid = vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ];
        let path = find_path(&grid, p(1, 1), p(2, 2));
        assert_eq!(path.len(), 3);
        assert_valid_path(&grid, &path, p(1, 1), p(2, 2));
    }

    #[test]
    fn test_astar_blocked_goal() {
        let grid = vec![
            vec![0, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 0],
        ];
        assert!(find_path(&grid, p(0, 0), p(1, 1)).is_empty());
    }

    #[test]
    fn test_astar_out_of_bounds() {
        let grid = vec![vec![0; 3]; 3];
        assert!(find_path(&grid, p(-1, 0), p(2, 2)).is_empty());
        assert!(find_path(&grid, p(3, 0), p(3, 0)).is_empty());
        assert!(find_path(&grid, p(0, 0), p(5, 5)).is_empty());
    }

    #[test]
    fn test_astar_distant_goal_does_not_overflow() {
        let grid = vec![vec![0; 3]; 3];
        assert!(find_path(&grid, p(0, 0), p(i32::MIN, i32::MIN)).is_empty());
        assert!(find_path(&grid, p(2, 2), p(i32::MAX, i32::MIN)).is_empty());

        let result = find_path_detailed(&grid, p(0, 0), p(i32::MIN, i32::MAX));
        assert!(!result.is_success());
        assert_eq!(result.nodes_explored, 9);
    }

    #[test]
    fn test_astar_empty_grid() {
        assert!(find_path(&[], p(0, 0), p(0, 0)).is_empty());
        assert!(find_path(&[vec![]], p(0, 0), p(0, 0)).is_empty());
    }

    #[test]
    fn test_astar_detailed_result() {
        let grid = vec![vec![0; 4]; 1];
        let result = find_path_detailed(&grid, p(0, 0), p(3, 0));
        assert!(result.is_success());
        assert_eq!(result.total_cost, Some(3));
        assert_eq!(result.path_length, 4);
        // A straight corridor with an exact heuristic expands only the path.
        assert_eq!(result.nodes_explored, 4);
        assert_eq!(
            result.to_string(),
            "PathResult { success: true, path_length: 4, total_cost: 3, nodes_explored: 4 }"
        );
        assert_eq!(result.into_path(), Some(vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]));
    }

    #[test]
    fn test_astar_detours_around_wall() {
        let grid = vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 1, 0],
        ];
        let path = find_path(&grid, p(2, 2), p(4, 2));
        // (2,2) (1,2) (0,2) (0,1) (0,0) (1,0) (2,0) (3,0) (4,0) (4,1) (4,2)
        assert_eq!(path.len(), 11);
        assert_valid_path(&grid, &path, p(2, 2), p(4, 2));
    }

    #[test]
    fn test_astar_is_deterministic() {
        let grid = vec![vec![0; 5]; 5];
        let first = find_path(&grid, p(0, 0), p(4, 4));
        let second = find_path(&grid, p(0, 0), p(4, 4));
        assert_eq!(first, second);
    }
}
