use anyhow::{Context, ensure};
use playfield_geometry::{AxisAlignedBox, Circle, boxes_overlap, circle_overlaps_box, circles_overlap};
use playfield_grid::{
    Grid, GridCoordinate, GridOverlay, PathResult, clear_completed_rows, find_path_detailed, flood_fill, grid,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::config::{CollisionSettings, GridSettings, Settings};

/// Everything one scenario run produced.
#[derive(Debug)]
pub struct Report {
    pub grid: Grid,
    pub path: PathResult,
    pub filled: usize,
    pub cleared: usize,
    /// Labels of every overlapping shape pair, e.g. `("box 0", "circle 1")`.
    pub overlaps: Vec<(String, String)>,
}

/// Builds the grid from the literal layout, or generates a seeded random one.
pub fn build_grid(settings: &GridSettings) -> anyhow::Result<Grid> {
    if let Some(layout) = &settings.layout {
        return grid::parse(layout).context("invalid grid layout");
    }

    ensure!(
        settings.width > 0 && settings.height > 0,
        "grid dimensions must be non-zero, got {}x{}",
        settings.width,
        settings.height
    );
    ensure!(
        (0.0..=1.0).contains(&settings.obstacle_density),
        "obstacle_density must be within [0, 1], got {}",
        settings.obstacle_density
    );

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let grid = (0..settings.height)
        .map(|_| {
            (0..settings.width)
                .map(|_| i32::from(rng.random_bool(settings.obstacle_density)))
                .collect()
        })
        .collect();
    Ok(grid)
}

fn clear_cell(grid: &mut Grid, p: GridCoordinate) {
    let cell = usize::try_from(p.y)
        .ok()
        .zip(usize::try_from(p.x).ok())
        .and_then(|(y, x)| grid.get_mut(y)?.get_mut(x));
    if let Some(cell) = cell {
        *cell = 0;
    }
}

/// Runs pathfinding, flood fill, row clearing and the collision checks described by `settings`.
pub fn run(settings: &Settings) -> anyhow::Result<Report> {
    let mut grid = build_grid(&settings.grid)?;
    let start = settings.path.start();
    let goal = settings.path.goal();
    if settings.grid.layout.is_none() {
        // Generated obstacles must not sit on the endpoints.
        clear_cell(&mut grid, start);
        clear_cell(&mut grid, goal);
    }
    info!(rows = grid.len(), columns = grid[0].len(), "Grid ready");
    print!("{}", GridOverlay::new(&grid));

    let path = find_path_detailed(&grid, start, goal);
    info!(%start, %goal, "{}", path);
    match &path.path {
        Some(steps) => print!("\n{}", GridOverlay::new(&grid).with_path(steps)),
        None => warn!(%start, %goal, "No path between the configured endpoints"),
    }

    let mut filled_grid = grid.clone();
    let filled = flood_fill(
        &mut filled_grid,
        settings.fill.start[0],
        settings.fill.start[1],
        settings.fill.value,
    );
    info!(filled, value = settings.fill.value, "Flood fill finished");

    let mut stacked = grid.clone();
    for &row in &settings.stack.complete_rows {
        match stacked.get_mut(row) {
            Some(cells) => cells.fill(1),
            None => warn!(row, "Configured complete row is outside the grid"),
        }
    }
    let cleared = clear_completed_rows(&mut stacked);
    info!(cleared, "Row clearing finished");

    let overlaps = check_collisions(&settings.collision)?;
    for (a, b) in &overlaps {
        info!("{} overlaps {}", a, b);
    }

    Ok(Report {
        grid,
        path,
        filled,
        cleared,
        overlaps,
    })
}

/// Checks every pair of configured shapes, rejecting malformed ones.
pub fn check_collisions(settings: &CollisionSettings) -> anyhow::Result<Vec<(String, String)>> {
    let boxes = settings
        .boxes
        .iter()
        .enumerate()
        .map(|(i, b)| AxisAlignedBox::try_new(b.min, b.max).with_context(|| format!("collision box {}", i)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let circles = settings
        .circles
        .iter()
        .enumerate()
        .map(|(i, c)| Circle::try_new(c.center, c.radius).with_context(|| format!("collision circle {}", i)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut overlaps = Vec::new();
    for (i, a) in boxes.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate().skip(i + 1) {
            if boxes_overlap(*a, *b) {
                overlaps.push((format!("box {}", i), format!("box {}", j)));
            }
        }
    }
    for (i, a) in circles.iter().enumerate() {
        for (j, b) in circles.iter().enumerate().skip(i + 1) {
            if circles_overlap(a.center, a.radius, b.center, b.radius) {
                overlaps.push((format!("circle {}", i), format!("circle {}", j)));
            }
        }
    }
    for (i, c) in circles.iter().enumerate() {
        for (j, b) in boxes.iter().enumerate() {
            if circle_overlaps_box(c.center, c.radius, *b) {
                overlaps.push((format!("circle {}", i), format!("box {}", j)));
            }
        }
    }
    Ok(overlaps)
}
