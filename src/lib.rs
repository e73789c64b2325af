//! A* shortest-path engine over a rectangular grid with togglable obstacles.
//!
//! The library owns the grid model ([`GridState`]) and the search
//! ([`find_path`]); callers such as the bundled terminal demo construct a
//! grid of fixed dimensions, toggle blocked cells, and ask for a route
//! between two cells. A route is an ordered `Vec<Position>` from start to
//! goal inclusive; an empty vector means no path exists or the endpoints
//! were unusable.

pub mod config;
pub mod grid;
pub mod search;

pub use grid::{GridState, Position};
pub use search::find_path;

/// Error type for grid construction and obstacle bookkeeping.
///
/// "No path found" is deliberately not represented here: an unreachable goal
/// is a normal search outcome reported as an empty path.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid constructed with a non-positive width or height.
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: i32, height: i32 },

    /// Obstacle toggle or query outside the grid; the grid is unchanged.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

/// Result type used throughout the crate.
pub type GridResult<T> = Result<T, GridError>;
