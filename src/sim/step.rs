//! Generation step
//!
//! Applies Conway's B3/S23 rule once across the whole board.

use super::grid::Grid;

/// Moore neighborhood offsets
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbors of (row, col)
pub fn live_neighbors(grid: &Grid, row: usize, col: usize, toroidal: bool) -> u8 {
    let (row, col) = (row as isize, col as isize);
    NEIGHBORS
        .iter()
        .filter(|&&(dr, dc)| grid.get(row + dr, col + dc, toroidal))
        .count() as u8
}

/// Compute the next generation.
///
/// Returns a new grid and its live-cell count; `grid` is left untouched.
pub fn step(grid: &Grid, toroidal: bool) -> (Grid, usize) {
    let mut next = grid.clone();
    let mut live = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let n = live_neighbors(grid, row, col, toroidal);
            let alive = match (grid.is_alive(row, col), n) {
                (true, 2) | (true, 3) => true,
                (false, 3) => true,
                _ => false,
            };
            next.set(row, col, alive);
            if alive {
                live += 1;
            }
        }
    }

    (next, live)
}
