use clap::Parser;

use grid_pathfinding::config::Config;
use grid_pathfinding::{find_path, GridState, Position};
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::init();
    let config = Config::parse();

    let mut grid = match GridState::new(config.width, config.height) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to create grid: {e}");
            process::exit(1);
        }
    };

    let (sx, sy) = config.start.unwrap_or((0, 0));
    let (gx, gy) = config
        .goal
        .unwrap_or((config.width - 1, config.height - 1));
    let start = Position::new(sx, sy);
    let goal = Position::new(gx, gy);

    for &(x, y) in &config.obstacles {
        if let Err(e) = grid.set_obstacle(x, y) {
            eprintln!("Invalid obstacle: {e}");
            process::exit(1);
        }
    }

    if config.random_obstacles > 0 {
        place_random_obstacles(&mut grid, &config, start, goal);
    }

    println!(
        "Grid: {}x{} | Obstacles: {} | Start: ({},{}) | Goal: ({},{})",
        grid.width(),
        grid.height(),
        grid.obstacles().len(),
        start.x,
        start.y,
        goal.x,
        goal.y
    );

    let search_start = Instant::now();
    let path = find_path(&grid, start, goal, None);
    let elapsed = search_start.elapsed();

    if path.is_empty() {
        println!("No path found ({elapsed:.2?})");
        if !config.quiet {
            print_grid(&grid, &path, start, goal);
        }
        process::exit(1);
    }

    println!("Path found: {} cells in {elapsed:.2?}", path.len());
    if !config.quiet {
        print_grid(&grid, &path, start, goal);
    }
}

/// Place random obstacles, skipping the endpoints and already-blocked cells.
/// Gives up after a bounded number of attempts on dense grids.
fn place_random_obstacles(grid: &mut GridState, config: &Config, start: Position, goal: Position) {
    let mut rng = match config.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let mut placed = 0;
    let mut attempts = 0;
    while placed < config.random_obstacles && attempts < config.random_obstacles * 10 {
        let x = rng.gen_range(0..grid.width());
        let y = rng.gen_range(0..grid.height());
        let pos = Position::new(x, y);

        if pos != start && pos != goal && !grid.is_blocked(x, y).unwrap_or(true) {
            let _ = grid.set_obstacle(x, y);
            placed += 1;
        }
        attempts += 1;
    }

    if placed < config.random_obstacles {
        eprintln!(
            "Warning: placed only {placed} of {} random obstacles",
            config.random_obstacles
        );
    }
}

/// Print a visual representation of the grid and the found path.
fn print_grid(grid: &GridState, path: &[Position], start: Position, goal: Position) {
    println!("Legend: S=Start, G=Goal, *=Path, #=Obstacle, .=Empty");

    let on_path: FxHashSet<Position> = path.iter().copied().collect();

    // Column numbers header
    print!("   ");
    for x in 0..grid.width() {
        print!("{:2}", x % 10);
    }
    println!();

    for y in 0..grid.height() {
        print!("{y:2} ");
        for x in 0..grid.width() {
            let pos = Position::new(x, y);
            let symbol = if pos == start {
                'S'
            } else if pos == goal {
                'G'
            } else if on_path.contains(&pos) {
                '*'
            } else if grid.is_blocked(x, y).unwrap_or(false) {
                '#'
            } else {
                '.'
            };
            print!("{symbol} ");
        }
        println!();
    }
    println!();
}
