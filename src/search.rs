use crate::grid::{GridState, Position};
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier node in the A* search.
///
/// `seq` is the insertion counter used as the final ordering tie-break, so
/// equal-cost frontiers are always expanded in a reproducible order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    position: Position,
    g_cost: u32,
    h_cost: u32,
    seq: u64,
}

impl SearchNode {
    fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed comparison to make BinaryHeap a min-heap. Ties go to the
        // lower heuristic, then to the earlier insertion.
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds a shortest 4-directional route from `start` to `goal`.
///
/// The returned path runs from `start` to `goal` inclusive; an empty vector
/// means no path exists or an endpoint is out of bounds or blocked. Equal-cost
/// routes are resolved deterministically, so identical inputs always produce
/// the identical sequence.
///
/// When `override_obstacles` is supplied it is the authoritative blocked set
/// for this single call: it replaces the grid's own set rather than merging
/// with it, and the grid's bookkeeping is left untouched afterward.
pub fn find_path(
    grid: &GridState,
    start: Position,
    goal: Position,
    override_obstacles: Option<&FxHashSet<Position>>,
) -> Vec<Position> {
    let blocked = match override_obstacles {
        Some(set) => set,
        None => grid.obstacles(),
    };
    trace!(
        "find_path: start=({},{}) goal=({},{}) blocked={}",
        start.x,
        start.y,
        goal.x,
        goal.y,
        blocked.len()
    );

    // Unusable endpoints and unreachable goals are the same observable
    // outcome: an empty path, never an error.
    if !grid.in_bounds(start) || !grid.in_bounds(goal) {
        debug!("find_path: endpoint outside the grid");
        return Vec::new();
    }
    if blocked.contains(&start) || blocked.contains(&goal) {
        debug!("find_path: endpoint blocked");
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let mut open = BinaryHeap::new();
    let mut closed: FxHashSet<Position> = FxHashSet::default();
    let mut g_costs: FxHashMap<Position, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Position, Position> = FxHashMap::default();
    let mut seq: u64 = 0;

    g_costs.insert(start, 0);
    open.push(SearchNode {
        position: start,
        g_cost: 0,
        h_cost: start.manhattan_distance(&goal),
        seq,
    });

    while let Some(current) = open.pop() {
        if current.position == goal {
            let path = reconstruct_path(&came_from, goal);
            debug!(
                "find_path: success, {} cells at cost {}, {} expanded",
                path.len(),
                current.g_cost,
                closed.len()
            );
            return path;
        }
        closed.insert(current.position);

        for neighbor in grid.neighbors(&current.position) {
            if closed.contains(&neighbor) || blocked.contains(&neighbor) {
                continue;
            }

            let tentative_g = current.g_cost + 1;
            match g_costs.get(&neighbor) {
                Some(&g) if tentative_g >= g => continue,
                // Cheaper route to an already-open cell: replace its heap
                // entry rather than queueing a duplicate.
                Some(_) => open.retain(|n| n.position != neighbor),
                None => {}
            }

            seq += 1;
            g_costs.insert(neighbor, tentative_g);
            came_from.insert(neighbor, current.position);
            open.push(SearchNode {
                position: neighbor,
                g_cost: tentative_g,
                h_cost: neighbor.manhattan_distance(&goal),
                seq,
            });
        }
    }

    debug!("find_path: no path after expanding {} cells", closed.len());
    Vec::new()
}

/// Walks the parent links backward from the goal, then reverses.
fn reconstruct_path(came_from: &FxHashMap<Position, Position>, goal: Position) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(&prev) = came_from.get(&current) {
        current = prev;
        path.push(current);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn grid(width: i32, height: i32) -> GridState {
        GridState::new(width, height).unwrap()
    }

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn start_equals_goal_is_a_single_cell_path() {
        let g = grid(5, 5);
        assert_eq!(find_path(&g, pos(3, 3), pos(3, 3), None), vec![pos(3, 3)]);
    }

    #[test]
    fn blocked_or_invalid_endpoints_yield_empty_paths() {
        let mut g = grid(5, 5);
        g.set_obstacle(0, 0).unwrap();
        g.set_obstacle(4, 4).unwrap();

        assert!(find_path(&g, pos(0, 0), pos(2, 2), None).is_empty());
        assert!(find_path(&g, pos(2, 2), pos(4, 4), None).is_empty());
        assert!(find_path(&g, pos(-1, 0), pos(2, 2), None).is_empty());
        assert!(find_path(&g, pos(2, 2), pos(5, 2), None).is_empty());
        // A blocked cell that is both start and goal is still unusable.
        assert!(find_path(&g, pos(0, 0), pos(0, 0), None).is_empty());
    }

    #[test]
    fn open_corner_to_corner_path_is_manhattan_optimal() {
        let g = grid(5, 5);
        let path = find_path(&g, pos(0, 0), pos(4, 4), None);

        assert_eq!(path.len(), 9);
        assert_eq!(path[0], pos(0, 0));
        assert_eq!(path[8], pos(4, 4));
        for step in path.windows(2) {
            let dx = (step[1].x - step[0].x).abs();
            let dy = (step[1].y - step[0].y).abs();
            assert_eq!(dx + dy, 1, "step {:?} -> {:?} is not unit", step[0], step[1]);
        }
    }

    #[test]
    fn routes_around_a_wall() {
        let mut g = grid(5, 5);
        for y in 0..4 {
            g.set_obstacle(2, y).unwrap();
        }

        let path = find_path(&g, pos(0, 0), pos(4, 0), None);
        assert!(!path.is_empty());
        assert!(path.contains(&pos(2, 4)), "must detour through the gap");
        // 4 across plus the detour down and back up.
        assert_eq!(path.len(), 13);
    }

    #[test]
    fn override_replaces_the_grid_set_for_one_call() {
        let mut g = grid(5, 5);
        g.set_obstacle(1, 0).unwrap();
        g.set_obstacle(1, 1).unwrap();
        g.set_obstacle(1, 2).unwrap();
        g.set_obstacle(1, 3).unwrap();
        g.set_obstacle(1, 4).unwrap();

        // The grid's own set makes the goal unreachable.
        assert!(find_path(&g, pos(0, 0), pos(4, 0), None).is_empty());

        // An empty override replaces (not merges with) the grid's set.
        let clear = FxHashSet::default();
        let path = find_path(&g, pos(0, 0), pos(4, 0), Some(&clear));
        assert_eq!(path.len(), 5);

        // A cleared cell still listed in the override stays blocked for the
        // call, and the grid's bookkeeping is untouched throughout.
        let mut listed: FxHashSet<Position> = g.obstacles().clone();
        g.clear_obstacle(1, 2).unwrap();
        listed.insert(pos(1, 2));
        assert!(find_path(&g, pos(0, 0), pos(4, 0), Some(&listed)).is_empty());
        assert!(!g.is_blocked(1, 2).unwrap());
        assert_eq!(g.obstacles().len(), 4);
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let mut g = grid(8, 8);
        g.set_obstacle(3, 3).unwrap();
        g.set_obstacle(4, 3).unwrap();
        g.set_obstacle(3, 4).unwrap();

        let first = find_path(&g, pos(0, 0), pos(7, 7), None);
        for _ in 0..10 {
            assert_eq!(find_path(&g, pos(0, 0), pos(7, 7), None), first);
        }
    }
}
