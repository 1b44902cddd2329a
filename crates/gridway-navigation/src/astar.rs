//! A* search over an [`OccupancyGrid`].
//!
//! `f(n) = g(n) + h(n)` where `g` is the step count from the start and `h`
//! is the Manhattan distance to the goal. Every edge costs 1 and the
//! heuristic never overestimates under 4-directional movement, so the first
//! time the goal is popped from the frontier its path is shortest.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::PathResult;
use crate::map::{GridPoint, OccupancyGrid};

/// Calculates the Manhattan distance between two grid points.
pub fn manhattan_distance(a: GridPoint, b: GridPoint) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State {
    cost: usize,
    position: GridPoint,
}

// The priority queue depends on `Ord`. Explicitly implement the trait with
// the cost comparison flipped so the std max-heap behaves as a min-heap;
// the positional tie-break keeps the ordering total.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost).then_with(|| {
            (self.position.y, self.position.x).cmp(&(other.position.y, other.position.x))
        })
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reconstructs the path from a map of `came_from` links.
fn reconstruct_path(
    came_from: &HashMap<GridPoint, GridPoint>,
    mut current: GridPoint,
) -> Vec<GridPoint> {
    let mut path = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Finds a shortest path from `start` to `goal` using the A* algorithm.
///
/// # Returns
/// * `Option<Vec<GridPoint>>` - The path if found, `None` otherwise.
pub fn astar_search(
    grid: &OccupancyGrid,
    start: GridPoint,
    goal: GridPoint,
) -> Option<Vec<GridPoint>> {
    astar_search_detailed(grid, start, goal).into_path()
}

/// Finds a shortest path from `start` to `goal` using the A* algorithm,
/// with detailed results.
///
/// A blocked or out-of-bounds endpoint yields the failure result rather
/// than a path through an obstacle.
///
/// # Returns
/// * `PathResult` - Detailed pathfinding result with metadata.
pub fn astar_search_detailed(
    grid: &OccupancyGrid,
    start: GridPoint,
    goal: GridPoint,
) -> PathResult {
    let mut nodes_expanded = 0;

    if !grid.is_free(start) || !grid.is_free(goal) {
        return PathResult::failure(nodes_expanded);
    }

    let mut open_set = BinaryHeap::new();
    let mut closed: HashSet<GridPoint> = HashSet::new();
    let mut came_from: HashMap<GridPoint, GridPoint> = HashMap::new();

    let mut g_score: HashMap<GridPoint, usize> = HashMap::new();
    g_score.insert(start, 0);

    open_set.push(State {
        cost: manhattan_distance(start, goal),
        position: start,
    });

    while let Some(State {
        position: current, ..
    }) = open_set.pop()
    {
        if current == goal {
            let path = reconstruct_path(&came_from, current);
            debug!(path_length = path.len(), nodes_expanded, "A* reached the goal");
            return PathResult::success(path, nodes_expanded);
        }

        // Lazy deletion: a cell is expanded at most once, and stale heap
        // entries left behind by cheaper re-discoveries are dropped here.
        // Requires uniform edge costs and a consistent heuristic.
        if !closed.insert(current) {
            continue;
        }
        nodes_expanded += 1;

        let current_g = g_score.get(&current).copied().unwrap_or(0);

        for neighbor in grid.neighbors(current) {
            let tentative_g_score = current_g + 1;
            if tentative_g_score < g_score.get(&neighbor).copied().unwrap_or(usize::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g_score);
                open_set.push(State {
                    cost: tentative_g_score + manhattan_distance(neighbor, goal),
                    position: neighbor,
                });
            }
        }
    }

    debug!(nodes_expanded, "A* frontier exhausted without reaching the goal");
    PathResult::failure(nodes_expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{CellState, OccupancyGrid};

    fn assert_valid_path(grid: &OccupancyGrid, path: &[GridPoint], start: GridPoint, goal: GridPoint) {
        assert!(!path.is_empty(), "Path should not be empty");
        assert_eq!(path[0], start, "Path start mismatch");
        assert_eq!(*path.last().unwrap(), goal, "Path goal mismatch");
        for pair in path.windows(2) {
            assert_eq!(
                manhattan_distance(pair[0], pair[1]),
                1,
                "Consecutive waypoints must be 4-adjacent: {} -> {}",
                pair[0],
                pair[1]
            );
            assert!(grid.is_free(pair[1]), "Path crosses a blocked cell");
        }
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(3, 4);
        assert_eq!(manhattan_distance(a, b), 7);
        assert_eq!(manhattan_distance(b, a), 7);
        assert_eq!(manhattan_distance(a, a), 0);
    }

    #[test]
    fn test_astar_unobstructed_is_manhattan() {
        let grid = OccupancyGrid::new(10, 10).unwrap();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 9);

        let path = astar_search(&grid, start, goal).expect("Path should be found");
        assert_valid_path(&grid, &path, start, goal);
        // With nothing in the way the shortest path has exactly
        // 1 + Manhattan(start, goal) waypoints.
        assert_eq!(path.len(), 1 + manhattan_distance(start, goal));
    }

    #[test]
    fn test_astar_routes_around_obstacles() {
        // A box in the middle of the grid forces a detour.
        let mut grid = OccupancyGrid::new(10, 10).unwrap();
        for x in 3..7 {
            for y in 3..7 {
                grid.set_state(GridPoint::new(x, y), CellState::Blocked).unwrap();
            }
        }

        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 9);

        let path = astar_search(&grid, start, goal).expect("Path should be found");
        assert_valid_path(&grid, &path, start, goal);
        // Detours around obstacles only ever add an even number of steps.
        let detour = path.len() - (1 + manhattan_distance(start, goal));
        assert_eq!(detour % 2, 0, "Detour must be an even number of steps");
    }

    #[test]
    fn test_astar_no_path() {
        // A full-height wall at x = 2 disconnects start from goal.
        let mut grid = OccupancyGrid::new(5, 5).unwrap();
        for y in 0..5 {
            grid.set_state(GridPoint::new(2, y), CellState::Blocked).unwrap();
        }

        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(4, 4);

        assert!(astar_search(&grid, start, goal).is_none());

        let result = astar_search_detailed(&grid, start, goal);
        assert!(!result.is_success());
        assert_eq!(result.path_length, 0);
        assert!(result.nodes_expanded > 0, "Should have expanded the reachable side");
    }

    #[test]
    fn test_astar_same_start_goal() {
        let grid = OccupancyGrid::new(5, 5).unwrap();
        let p = GridPoint::new(2, 2);

        let path = astar_search(&grid, p, p).expect("Path should be found");
        assert_eq!(path, vec![p], "Path should contain only the start/goal point");
    }

    #[test]
    fn test_astar_blocked_endpoints() {
        let blocked = [GridPoint::new(0, 0), GridPoint::new(4, 4)];
        let grid = OccupancyGrid::with_blocked(5, 5, &blocked).unwrap();

        // Blocked start
        assert!(astar_search(&grid, GridPoint::new(0, 0), GridPoint::new(2, 2)).is_none());
        // Blocked goal
        assert!(astar_search(&grid, GridPoint::new(2, 2), GridPoint::new(4, 4)).is_none());
        // Out-of-bounds goal
        assert!(astar_search(&grid, GridPoint::new(2, 2), GridPoint::new(9, 9)).is_none());
    }

    #[test]
    fn test_astar_repeat_runs_agree_on_length() {
        let blocked = [
            GridPoint::new(2, 1),
            GridPoint::new(2, 2),
            GridPoint::new(2, 3),
        ];
        let grid = OccupancyGrid::with_blocked(6, 6, &blocked).unwrap();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(5, 5);

        let first = astar_search(&grid, start, goal).expect("Path should be found");
        let second = astar_search(&grid, start, goal).expect("Path should be found");
        // The exact waypoint sequence is an implementation detail; the
        // optimal length is not.
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn test_astar_detailed_metadata() {
        let grid = OccupancyGrid::new(5, 5).unwrap();
        let result =
            astar_search_detailed(&grid, GridPoint::new(0, 0), GridPoint::new(4, 4));

        assert!(result.is_success());
        assert!(result.nodes_expanded > 0, "Should have expanded some cells");
        assert_eq!(result.path_length, 9);

        let display_str = format!("{}", result);
        assert!(display_str.contains("success: true"));
        assert!(display_str.contains("nodes_expanded"));
    }
}
