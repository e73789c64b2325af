use crate::{GridError, GridResult};
use rustc_hash::FxHashSet;

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that out-of-range input like `(-1, 0)` can be
/// rejected with [`GridError::OutOfBounds`] instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Manhattan distance to another cell: `|dx| + |dy|`.
    ///
    /// Exact cost lower bound under 4-directional unit-cost movement, which
    /// makes it an admissible and consistent A* heuristic.
    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }
}

/// Grid dimensions plus the set of blocked cells.
///
/// Dimensions are fixed at construction; obstacles are toggled incrementally.
/// A "reset" is expected to construct a fresh `GridState` rather than clear
/// an existing one, and cloning is cheap enough to snapshot a layout for a
/// concurrent search.
#[derive(Debug, Clone)]
pub struct GridState {
    width: i32,
    height: i32,
    blocked: FxHashSet<Position>,
}

impl GridState {
    /// Creates an empty grid. Both dimensions must be at least 1.
    pub fn new(width: i32, height: i32) -> GridResult<Self> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(GridState {
            width,
            height,
            blocked: FxHashSet::default(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Marks a cell blocked. Idempotent; re-blocking a cell is a no-op.
    pub fn set_obstacle(&mut self, x: i32, y: i32) -> GridResult<()> {
        let pos = self.checked_position(x, y)?;
        self.blocked.insert(pos);
        Ok(())
    }

    /// Unmarks a cell. Idempotent; clearing an unblocked cell is a no-op.
    pub fn clear_obstacle(&mut self, x: i32, y: i32) -> GridResult<()> {
        let pos = self.checked_position(x, y)?;
        self.blocked.remove(&pos);
        Ok(())
    }

    /// Whether a cell is currently blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> GridResult<bool> {
        let pos = self.checked_position(x, y)?;
        Ok(self.blocked.contains(&pos))
    }

    /// The grid's own obstacle set, used by the search unless the caller
    /// supplies a per-call override.
    pub fn obstacles(&self) -> &FxHashSet<Position> {
        &self.blocked
    }

    /// In-bounds 4-neighbors of a cell, in a fixed order.
    ///
    /// Out-of-bounds cells are never yielded, so the search treats the grid
    /// border as impassable without a separate bounds check per expansion.
    pub fn neighbors(&self, pos: &Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);

        for (dx, dy) in &[(0, 1), (0, -1), (1, 0), (-1, 0)] {
            let next = Position::new(pos.x + dx, pos.y + dy);
            if self.in_bounds(next) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    fn checked_position(&self, x: i32, y: i32) -> GridResult<Position> {
        let pos = Position::new(x, y);
        if !self.in_bounds(pos) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos)
    }
}
