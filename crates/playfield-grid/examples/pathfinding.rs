use playfield_grid::{GridCoordinate, GridOverlay, find_path_detailed, grid};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    // 0 = walkable
    // 1 = blocked
    let grid = grid::parse(
        "
        . . . . . . . . . .
        . # # . . . . # # .
        . . . . # . . . . .
        . . # # # # . # . .
        . . . . . # . # . .
        . # # # . # . # # .
        . . . # . . . . . .
        . # . # . # # # . .
        . # . . . . . . # .
        . . . # # # . . . .
        ",
    )
    .expect("example grid is well formed");

    let start = GridCoordinate::new(0, 0);
    let goal = GridCoordinate::new(9, 9);

    println!("Grid:");
    print!("{}", GridOverlay::new(&grid));
    println!("\nStart: {}, Goal: {}", start, goal);

    let result = find_path_detailed(&grid, start, goal);
    println!("\n{}", result);

    match result.into_path() {
        Some(path) => {
            println!("\nGrid with path:");
            print!("{}", GridOverlay::new(&grid).with_path(&path));
        }
        None => println!("\nNo path found."),
    }
}
