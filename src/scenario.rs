//! Compiled-in demo scenario: the 10x10 grid, its obstacles and endpoints.

use anyhow::Context;

use gridway_navigation::map::{GridPoint, OccupancyGrid};

pub const GRID_WIDTH: usize = 10;
pub const GRID_HEIGHT: usize = 10;

/// Obstacle cells, as (x = column, y = row).
pub const OBSTACLES: [GridPoint; 9] = [
    GridPoint::new(2, 2),
    GridPoint::new(3, 3),
    GridPoint::new(4, 3),
    GridPoint::new(5, 3),
    GridPoint::new(6, 4),
    GridPoint::new(6, 5),
    GridPoint::new(7, 6),
    GridPoint::new(7, 7),
    GridPoint::new(7, 8),
];

pub const START: GridPoint = GridPoint::new(0, 0);
pub const GOAL: GridPoint = GridPoint::new(9, 9);

pub const ASTAR_NAME: &str = "A*";
pub const DFS_NAME: &str = "Backtracking";

/// Builds the demo occupancy grid.
pub fn build_grid() -> anyhow::Result<OccupancyGrid> {
    OccupancyGrid::with_blocked(GRID_WIDTH, GRID_HEIGHT, &OBSTACLES)
        .context("invalid demo scenario")
}
