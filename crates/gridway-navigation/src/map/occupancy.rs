//! Occupancy grid used by the search engines.
//!
//! The grid is a fixed-size 2D field of [`CellState`] values stored row-major.
//! It is built once at startup and treated as immutable afterwards; the search
//! engines only ever read from it. Bounds are enforced where neighbors are
//! generated, so the planners themselves never see an out-of-range cell.

#![warn(missing_docs)]

use crate::error::GridError;
use super::GridPoint;

/// Occupancy of a single grid cell.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Traversable cell.
    Free = 0,
    /// Obstacle cell; the planners never enter it.
    Blocked = 1,
}

impl CellState {
    /// Converts the CellState to its u8 representation.
    pub fn as_u8(&self) -> u8 {
        match self {
            CellState::Free => 0,
            CellState::Blocked => 1,
        }
    }

    /// Creates a CellState from a u8 value. Any non-zero value is Blocked.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CellState::Free,
            _ => CellState::Blocked,
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellState::Free => write!(f, "Free"),
            CellState::Blocked => write!(f, "Blocked"),
        }
    }
}

/// A 2D occupancy grid with `width * height` cells.
///
/// Cell (0, 0) is the top-left corner; x grows to the right (columns) and
/// y grows downwards (rows).
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    /// Width of the grid in cells.
    width: usize,
    /// Height of the grid in cells.
    height: usize,
    /// Vector storing the state of each cell, row-major.
    data: Vec<CellState>,
}

impl OccupancyGrid {
    /// Creates a new all-free grid with the specified dimensions.
    ///
    /// # Arguments
    /// * `width` - Width of the grid in cells
    /// * `height` - Height of the grid in cells
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The created grid or an error if the
    ///   dimensions are invalid
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions(
                "Width and height must be non-zero",
            ));
        }

        // Check for potential overflow in data allocation
        let total_cells = width.checked_mul(height).ok_or(GridError::InvalidDimensions(
            "Grid dimensions too large, would cause overflow",
        ))?;

        Ok(OccupancyGrid {
            width,
            height,
            data: vec![CellState::Free; total_cells],
        })
    }

    /// Creates a grid with the given cells marked as blocked.
    ///
    /// # Arguments
    /// * `width` - Width of the grid in cells
    /// * `height` - Height of the grid in cells
    /// * `blocked` - Cells to mark as [`CellState::Blocked`]
    ///
    /// # Returns
    /// * `Result<Self, GridError>` - The created grid, or an error if the
    ///   dimensions are invalid or any blocked cell is out of bounds
    pub fn with_blocked(
        width: usize,
        height: usize,
        blocked: &[GridPoint],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for &p in blocked {
            grid.set_state(p, CellState::Blocked)?;
        }
        Ok(grid)
    }

    /// Gets the width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Gets the height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the total number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.data.len()
    }

    /// Calculates the index in the data vector for a given grid point.
    fn index(&self, p: GridPoint) -> usize {
        p.y * self.width + p.x
    }

    /// Returns true if the point lies inside the grid.
    pub fn in_bounds(&self, p: GridPoint) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Gets the state of a cell.
    pub fn state(&self, p: GridPoint) -> Result<CellState, GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds("Grid point out of bounds"));
        }
        Ok(self.data[self.index(p)])
    }

    /// Sets the state of a cell.
    pub fn set_state(&mut self, p: GridPoint, state: CellState) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds("Grid point out of bounds"));
        }
        let index = self.index(p);
        self.data[index] = state;
        Ok(())
    }

    /// Returns true if the point is inside the grid and free.
    /// Out-of-bounds points are reported as not free rather than as errors.
    pub fn is_free(&self, p: GridPoint) -> bool {
        self.in_bounds(p) && self.data[self.index(p)] == CellState::Free
    }

    /// Gets the free in-bounds 4-neighbors of a point.
    ///
    /// The expansion order is fixed: +x, +y, -x, -y (that is +col, +row,
    /// -col, -row). The planners rely on this order being stable; for the
    /// depth-first engine the *last* entry is explored first.
    pub fn neighbors(&self, p: GridPoint) -> Vec<GridPoint> {
        let mut neighbors = Vec::with_capacity(4);
        if p.x + 1 < self.width {
            neighbors.push(GridPoint::new(p.x + 1, p.y));
        }
        if p.y + 1 < self.height {
            neighbors.push(GridPoint::new(p.x, p.y + 1));
        }
        if p.x > 0 {
            neighbors.push(GridPoint::new(p.x - 1, p.y));
        }
        if p.y > 0 {
            neighbors.push(GridPoint::new(p.x, p.y - 1));
        }
        neighbors.retain(|n| self.is_free(*n));
        neighbors
    }
}

impl std::fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "OccupancyGrid ({}x{})", self.width, self.height)?;
        for y in 0..self.height {
            for x in 0..self.width {
                match self.state(GridPoint::new(x, y)) {
                    Ok(CellState::Free) => write!(f, ". ")?,
                    Ok(CellState::Blocked) => write!(f, "X ")?,
                    Err(_) => write!(f, "E ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
