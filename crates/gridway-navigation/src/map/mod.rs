//! Grid model: cell states, grid points and the occupancy grid itself.

mod occupancy;
mod point_types;

pub use occupancy::{CellState, OccupancyGrid};
pub use point_types::GridPoint;
