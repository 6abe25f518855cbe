//! Rectangular lattice of cells.

use crate::error::MazeError;
use std::fmt;

/// A single cell, identified by its column and row.
///
/// Two cells are equal iff their coordinates match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A `width x height` lattice of cells.
///
/// The grid only defines which cells exist and how they are indexed;
/// which neighboring cells are actually connected is decided by the
/// [Maze](crate::maze::Maze) built over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    /// Create a grid of the given dimensions.
    ///
    /// Fails with [MazeError::InvalidDimension] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Grid { width, height })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds-checked cell lookup.
    ///
    /// Fails with [MazeError::OutOfBounds] if the coordinates fall outside
    /// the grid.
    pub fn cell_at(&self, x: u32, y: u32) -> Result<Cell, MazeError> {
        if x >= self.width || y >= self.height {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Cell::new(x, y))
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major index of a cell, `y * width + x`.
    #[inline]
    pub fn index_of(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell));
        cell.y as usize * self.width as usize + cell.x as usize
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(MazeError::InvalidDimension {
                width: 5,
                height: 0
            })
        );
        // a constructed grid always holds at least one cell
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(grid.len(), 1);
        assert!(!grid.is_empty());
    }

    #[test]
    fn cell_lookup_is_bounds_checked() {
        let grid = Grid::new(3, 2).unwrap();

        assert_eq!(grid.cell_at(2, 1), Ok(Cell::new(2, 1)));
        assert_eq!(
            grid.cell_at(3, 0),
            Err(MazeError::OutOfBounds {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert_eq!(
            grid.cell_at(0, 2),
            Err(MazeError::OutOfBounds {
                x: 0,
                y: 2,
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn row_major_indexing() {
        let grid = Grid::new(4, 3).unwrap();

        assert_eq!(grid.index_of(Cell::new(0, 0)), 0);
        assert_eq!(grid.index_of(Cell::new(3, 0)), 3);
        assert_eq!(grid.index_of(Cell::new(0, 1)), 4);
        assert_eq!(grid.index_of(Cell::new(3, 2)), 11);
    }

    #[test]
    fn cells_iterates_every_cell_once() {
        let grid = Grid::new(20, 12).unwrap();
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), grid.len());
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(grid.index_of(*cell), i);
        }
    }

    #[test]
    fn cell_equality_is_coordinate_equality() {
        assert_eq!(Cell::new(4, 5), Cell::new(4, 5));
        assert_ne!(Cell::new(4, 5), Cell::new(5, 4));
        assert_eq!(Cell::new(1, 2).to_string(), "(1, 2)");
    }
}
