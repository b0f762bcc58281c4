//! Grid ⇄ pattern conversion and hex text import/export

use super::hex::{CELLS_PER_DIGIT, Pattern, hex_digit, nibble, row_width};
use crate::sim::Grid;

/// Line terminator written after every exported row
pub const EXPORT_LINE_END: &str = "\r\n";

/// Inclusive bounding box of the live cells, or None for an empty grid
fn bounding_box(grid: &Grid) -> Option<(usize, usize, usize, usize)> {
    let mut bounds: Option<(usize, usize, usize, usize)> = None;
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, _) in row.iter().enumerate().filter(|&(_, &alive)| alive) {
            bounds = Some(match bounds {
                None => (r, c, r, c),
                Some((top, left, bottom, right)) => {
                    (top.min(r), left.min(c), bottom.max(r), right.max(c))
                }
            });
        }
    }
    bounds
}

/// Encode the live region of a grid, trimmed to its bounding box.
///
/// An all-dead grid encodes to the empty pattern.
pub fn encode(grid: &Grid) -> Pattern {
    let Some((top, left, bottom, right)) = bounding_box(grid) else {
        return Pattern::empty();
    };

    let cells = (top..=bottom)
        .map(|r| {
            (left..=right)
                .step_by(CELLS_PER_DIGIT)
                .map(|start| {
                    let end = (start + CELLS_PER_DIGIT).min(right + 1);
                    let value = (start..end)
                        .filter(|&c| grid.is_alive(r, c))
                        .fold(0u8, |acc, c| acc | (8 >> (c - start)));
                    hex_digit(value)
                })
                .collect::<String>()
        })
        .collect();

    Pattern::from_parts(bottom - top + 1, right - left + 1, cells)
}

/// Parse exported hex text back into a pattern.
///
/// Runs of uppercase hex digits are rows; anything else separates rows
/// and blank runs are dropped. The width is the widest extent of live
/// cells over all rows, so trailing dead columns are not recovered. No
/// rows, or rows with no live cell at all, give the empty pattern.
pub fn decode(text: &str) -> Pattern {
    let rows: Vec<String> = text
        .split(|c: char| !c.is_ascii() || nibble(c as u8).is_none())
        .filter(|run| !run.is_empty())
        .map(str::to_owned)
        .collect();

    let cols = rows.iter().map(|row| row_width(row)).max().unwrap_or(0);
    if rows.is_empty() || cols == 0 {
        return Pattern::empty();
    }
    Pattern::from_parts(rows.len(), cols, rows)
}

/// Render a pattern as export text, one CRLF-terminated line per row
pub fn to_text(pattern: &Pattern) -> String {
    pattern
        .cells()
        .iter()
        .map(|row| format!("{row}{EXPORT_LINE_END}"))
        .collect()
}

/// Set every live pattern cell with its top-left corner at (top_row, left_col).
///
/// Existing live cells are never cleared. Cells landing off the board
/// are dropped.
pub fn place(pattern: &Pattern, grid: &mut Grid, top_row: isize, left_col: isize) {
    for (r, c) in pattern.live_cells() {
        let (row, col) = (top_row + r as isize, left_col + c as isize);
        if grid.contains(row, col) {
            grid.set(row as usize, col as usize, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(r, c) in live {
            grid.set(r, c, true);
        }
        grid
    }

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        (0..grid.rows())
            .flat_map(|r| (0..grid.cols()).map(move |c| (r, c)))
            .filter(|&(r, c)| grid.is_alive(r, c))
            .collect()
    }

    #[test]
    fn test_encode_empty_grid() {
        let grid = Grid::new(10, 10).unwrap();
        let pattern = encode(&grid);
        assert!(pattern.is_empty());
        assert_eq!((pattern.rows(), pattern.cols()), (0, 0));
        assert!(pattern.cells().is_empty());
        assert_eq!(to_text(&pattern), "");
    }

    #[test]
    fn test_encode_glider() {
        // .X.
        // ..X
        // XXX
        let grid = grid_with(8, 8, &[(2, 4), (3, 5), (4, 3), (4, 4), (4, 5)]);
        let pattern = encode(&grid);
        assert_eq!((pattern.rows(), pattern.cols()), (3, 3));
        assert_eq!(pattern.cells(), &["4", "2", "E"]);
        assert_eq!(to_text(&pattern), "4\r\n2\r\nE\r\n");
    }

    #[test]
    fn test_encode_partial_trailing_digit() {
        // Five columns wide: second digit carries a single cell
        let grid = grid_with(3, 9, &[(1, 2), (1, 6)]);
        let pattern = encode(&grid);
        assert_eq!((pattern.rows(), pattern.cols()), (1, 5));
        assert_eq!(pattern.cells(), &["88"]);
        assert_eq!(pattern.population(), 2);
    }

    #[test]
    fn test_decode_tolerates_separators() {
        let pattern = decode("\r\n4\r\n2\n\n E \r\n");
        assert_eq!((pattern.rows(), pattern.cols()), (3, 3));
        assert_eq!(pattern.cells(), &["4", "2", "E"]);

        // Lowercase digits are not hex digits here
        let pattern = decode("8e8");
        assert_eq!(pattern.cells(), &["8", "8"]);
        assert_eq!(pattern.cols(), 1);
    }

    #[test]
    fn test_decode_garbage_is_empty() {
        assert!(decode("").is_empty());
        assert!(decode("xyz\r\n\r\n").is_empty());
        assert!(decode("00\r\n0").is_empty());
    }

    #[test]
    fn test_decode_drops_trailing_dead_column() {
        // A 1x4 pattern whose rightmost column is dead comes back 3 wide
        let original = Pattern::new(1, 4, vec!["E".into()]).unwrap();
        let decoded = decode(&to_text(&original));
        assert_eq!(decoded.cols(), 3);
        assert_eq!(
            decoded.live_cells().collect::<Vec<_>>(),
            original.live_cells().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_place_sets_only_and_crops() {
        let pattern = decode("C\r\nC");
        let mut grid = grid_with(4, 4, &[(0, 0)]);
        place(&pattern, &mut grid, 2, 3);
        assert_eq!(live_set(&grid), vec![(0, 0), (2, 3), (3, 3)]);

        place(&pattern, &mut grid, -1, -1);
        assert_eq!(live_set(&grid), vec![(0, 0), (2, 3), (3, 3)]);

        // Setting over an existing live cell keeps it alive
        place(&pattern, &mut grid, 2, 2);
        assert_eq!(live_set(&grid), vec![(0, 0), (2, 2), (2, 3), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_place_empty_is_noop() {
        let mut grid = grid_with(5, 5, &[(1, 1), (3, 4)]);
        let before = grid.clone();
        place(&Pattern::empty(), &mut grid, 0, 0);
        assert_eq!(grid, before);
    }

    proptest! {
        #[test]
        fn prop_round_trip_with_live_right_edge(
            rows in 1usize..8,
            cols in 1usize..14,
            bits in proptest::collection::vec(any::<bool>(), 8 * 14),
        ) {
            // Every row's last column alive, so no width is lost
            let mut grid = Grid::new(rows + 2, cols + 2).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    let alive = c == cols - 1 || bits[r * 14 + c];
                    grid.set(r + 1, c + 1, alive);
                }
            }

            let encoded = encode(&grid);
            let decoded = decode(&to_text(&encoded));
            prop_assert_eq!(&decoded, &encoded);

            let left = (0..cols)
                .find(|&c| (0..rows).any(|r| grid.is_alive(r + 1, c + 1)))
                .unwrap();
            let mut target = Grid::new(rows + 2, cols + 2).unwrap();
            place(&decoded, &mut target, 1, left as isize + 1);
            prop_assert_eq!(live_set(&target), live_set(&grid));
        }
    }
}
