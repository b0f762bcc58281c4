//! Cell grid and boundary policy
//!
//! A `Grid` is a dense row-major matrix of live/dead cells. It is never
//! shared between generations: the stepper always builds a fresh grid.

use thiserror::Error;

use super::board::BoardSize;

/// Grid construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows or columns was zero
    #[error("invalid grid dimension: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
}

/// Rectangular matrix of cells (true = alive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create an all-dead grid sized for a standard board
    pub fn for_board(size: BoardSize) -> Self {
        let (rows, cols) = size.dimensions();
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a grid from a boolean matrix (all rows must share one width)
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.iter().any(|r| r.len() != cols) {
            return Err(GridError::InvalidDimension {
                rows: rows.len(),
                cols,
            });
        }
        let mut grid = Self::new(rows.len(), cols)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                grid.set(r, c, alive);
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Read a cell, possibly outside the board.
    ///
    /// Toroidal boards wrap the coordinates onto the opposite edge. Flat
    /// boards treat everything outside as dead.
    pub fn get(&self, row: isize, col: isize, toroidal: bool) -> bool {
        let (rows, cols) = (self.rows as isize, self.cols as isize);
        let (row, col) = if toroidal {
            (row.rem_euclid(rows), col.rem_euclid(cols))
        } else if row < 0 || row >= rows || col < 0 || col >= cols {
            return false;
        } else {
            (row, col)
        };
        self.cells[self.index(row as usize, col as usize)]
    }

    /// In-range read
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    /// Whether (row, col) lies on the board
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }

    /// Row-major cell bytes (1 = alive), for handing to a renderer
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&alive| u8::from(alive)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert!(Grid::new(3, 0).is_err());
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_rows().count(), 2);
    }

    #[test]
    fn test_for_board_dimensions() {
        let grid = Grid::for_board(BoardSize::Large);
        assert_eq!((grid.rows(), grid.cols()), (60, 100));
    }

    #[test]
    fn test_flat_board_outside_is_dead() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 0, true);
        grid.set(2, 2, true);
        assert!(grid.get(0, 0, false));
        assert!(!grid.get(-1, 0, false));
        assert!(!grid.get(0, 3, false));
        assert!(!grid.get(3, 3, false));
    }

    #[test]
    fn test_toroidal_wraps_single_step() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set(2, 3, true);
        assert!(grid.get(-1, -1, true));
        assert!(grid.get(2, -1, true));
        assert!(grid.get(-1, 3, true));

        grid.set(0, 0, true);
        assert!(grid.get(3, 4, true));
        assert!(grid.get(0, 4, true));
    }

    #[test]
    fn test_toggle_and_clone_are_independent() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.toggle(1, 1);
        let snapshot = grid.clone();
        grid.toggle(1, 1);
        assert!(snapshot.is_alive(1, 1));
        assert!(!grid.is_alive(1, 1));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(&[vec![true, false], vec![true]]).is_err());
        assert!(Grid::from_rows(&[]).is_err());
        let grid = Grid::from_rows(&[vec![false, true], vec![true, true]]).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.to_bytes(), vec![0, 1, 1, 1]);
    }
}
