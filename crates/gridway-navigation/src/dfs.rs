//! Depth-first backtracking search over an [`OccupancyGrid`].
//!
//! An explicit LIFO stack replaces recursion. Each frontier entry carries the
//! full path taken to reach it, so extracting the result on success is a
//! move, not a reconstruction. The search finds *a* path, not a shortest
//! one; within the grid's connectivity its length is unbounded.

use std::collections::HashSet;

use tracing::debug;

use crate::PathResult;
use crate::map::{GridPoint, OccupancyGrid};

/// Finds some path from `start` to `goal` by depth-first exploration.
///
/// # Returns
/// * `Option<Vec<GridPoint>>` - A path if one exists, `None` otherwise.
pub fn dfs_search(
    grid: &OccupancyGrid,
    start: GridPoint,
    goal: GridPoint,
) -> Option<Vec<GridPoint>> {
    dfs_search_detailed(grid, start, goal).into_path()
}

/// Finds some path from `start` to `goal` by depth-first exploration, with
/// detailed results.
///
/// Endpoint validation matches the A* engine: a blocked or out-of-bounds
/// start or goal yields the failure result.
///
/// # Returns
/// * `PathResult` - Detailed pathfinding result with metadata.
pub fn dfs_search_detailed(
    grid: &OccupancyGrid,
    start: GridPoint,
    goal: GridPoint,
) -> PathResult {
    let mut nodes_expanded = 0;

    if !grid.is_free(start) || !grid.is_free(goal) {
        return PathResult::failure(nodes_expanded);
    }

    let mut stack: Vec<(GridPoint, Vec<GridPoint>)> = vec![(start, vec![start])];
    let mut visited: HashSet<GridPoint> = HashSet::new();

    while let Some((current, path)) = stack.pop() {
        if current == goal {
            debug!(path_length = path.len(), nodes_expanded, "DFS reached the goal");
            return PathResult::success(path, nodes_expanded);
        }

        // Visited is marked on pop, not on push: a cell can sit on the stack
        // several times, pushed by different neighbors, and the first pop
        // wins. Later duplicate pops are skipped here.
        if !visited.insert(current) {
            continue;
        }
        nodes_expanded += 1;

        // Same fixed neighbor order as A*, but the stack reverses it: the
        // last-pushed direction (-y) is explored first.
        for neighbor in grid.neighbors(current) {
            let mut next_path = path.clone();
            next_path.push(neighbor);
            stack.push((neighbor, next_path));
        }
    }

    debug!(nodes_expanded, "DFS stack exhausted without reaching the goal");
    PathResult::failure(nodes_expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::{astar_search, manhattan_distance};
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
    fn test_dfs_finds_a_path() {
        let mut grid = OccupancyGrid::new(10, 10).unwrap();
        for x in 3..7 {
            for y in 3..7 {
                grid.set_state(GridPoint::new(x, y), CellState::Blocked).unwrap();
            }
        }

        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(9, 9);

        let path = dfs_search(&grid, start, goal).expect("Path should be found");
        assert_valid_path(&grid, &path, start, goal);
    }

    #[test]
    fn test_dfs_never_beats_astar() {
        let blocked = [
            GridPoint::new(1, 1),
            GridPoint::new(2, 3),
            GridPoint::new(4, 2),
            GridPoint::new(3, 4),
        ];
        let grid = OccupancyGrid::with_blocked(6, 6, &blocked).unwrap();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(5, 5);

        let astar_path = astar_search(&grid, start, goal).expect("A* should find a path");
        let dfs_path = dfs_search(&grid, start, goal).expect("DFS should find a path");
        assert!(
            astar_path.len() <= dfs_path.len(),
            "A* is optimal, DFS is not: {} > {}",
            astar_path.len(),
            dfs_path.len()
        );
    }

    #[test]
    fn test_dfs_no_path() {
        let mut grid = OccupancyGrid::new(5, 5).unwrap();
        for y in 0..5 {
            grid.set_state(GridPoint::new(2, y), CellState::Blocked).unwrap();
        }

        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(4, 4);

        assert!(dfs_search(&grid, start, goal).is_none());

        let result = dfs_search_detailed(&grid, start, goal);
        assert!(!result.is_success());
        assert_eq!(result.path_length, 0);
        assert!(result.nodes_expanded > 0, "Should have expanded the reachable side");
    }

    #[test]
    fn test_dfs_same_start_goal() {
        let grid = OccupancyGrid::new(5, 5).unwrap();
        let p = GridPoint::new(3, 1);

        let path = dfs_search(&grid, p, p).expect("Path should be found");
        assert_eq!(path, vec![p], "Path should contain only the start/goal point");
    }

    #[test]
    fn test_dfs_blocked_endpoints() {
        let blocked = [GridPoint::new(0, 0), GridPoint::new(4, 4)];
        let grid = OccupancyGrid::with_blocked(5, 5, &blocked).unwrap();

        assert!(dfs_search(&grid, GridPoint::new(0, 0), GridPoint::new(2, 2)).is_none());
        assert!(dfs_search(&grid, GridPoint::new(2, 2), GridPoint::new(4, 4)).is_none());
        assert!(dfs_search(&grid, GridPoint::new(2, 2), GridPoint::new(9, 9)).is_none());
    }

    #[test]
    fn test_dfs_depth_bias() {
        // From (0, 0) only +x and +y exist; +y is pushed last, so the walk
        // dives down the first column before anything else. The result is
        // still a valid path, bounded below by the Manhattan distance.
        let grid = OccupancyGrid::new(4, 4).unwrap();
        let start = GridPoint::new(0, 0);
        let goal = GridPoint::new(3, 3);

        let path = dfs_search(&grid, start, goal).expect("Path should be found");
        assert_valid_path(&grid, &path, start, goal);
        assert!(path.len() >= 1 + manhattan_distance(start, goal));
    }
}
