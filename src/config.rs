use clap::Parser;

/// Command-line options for the demo binary.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "A* pathfinding over a grid with togglable obstacles", long_about = None)]
pub struct Config {
    #[arg(long, default_value_t = 10)]
    pub width: i32,

    #[arg(long, default_value_t = 10)]
    pub height: i32,

    /// Start cell as "x,y". Defaults to the top-left corner.
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<(i32, i32)>,

    /// Goal cell as "x,y". Defaults to the bottom-right corner.
    #[arg(long, value_parser = parse_cell)]
    pub goal: Option<(i32, i32)>,

    /// Blocked cell as "x,y". Repeatable.
    #[arg(long = "obstacle", value_parser = parse_cell)]
    pub obstacles: Vec<(i32, i32)>,

    /// Number of additional randomly placed obstacles.
    #[arg(long, default_value_t = 0)]
    pub random_obstacles: usize,

    /// Seed for random obstacle placement, for reproducible layouts.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress the grid rendering and only print the result summary.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

fn parse_cell(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{s}\""))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in \"{s}\": {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in \"{s}\": {e}"))?;
    Ok((x, y))
}
