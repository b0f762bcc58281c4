//! Hex-row pattern value
//!
//! A pattern is the bounding rectangle of a set of live cells. Each row
//! is a string of uppercase hex digits; every digit packs four
//! horizontally consecutive cells, most significant bit leftmost.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells packed into one hex digit
pub const CELLS_PER_DIGIT: usize = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Pattern validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// `rows` does not match the number of row strings
    #[error("pattern declares {rows} rows but has {found} row strings")]
    RowCountMismatch { rows: usize, found: usize },
    /// A row string holds something other than an uppercase hex digit
    #[error("invalid hex digit {digit:?} in pattern row {row}")]
    InvalidDigit { row: usize, digit: char },
    /// Exactly one of rows/cols is zero
    #[error("pattern dimensions {rows}x{cols} must both be zero or both be non-zero")]
    EmptyMismatch { rows: usize, cols: usize },
}

/// Value of an uppercase hex digit
#[inline]
pub fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Uppercase hex digit for a nibble (only the low 4 bits are used)
#[inline]
pub fn hex_digit(value: u8) -> char {
    HEX_DIGITS[(value & 0xF) as usize] as char
}

/// Columns a row string spans, ignoring trailing dead cells.
///
/// Width ends at the last live cell of the last nonzero digit; an
/// all-zero row spans nothing.
pub fn row_width(row: &str) -> usize {
    row.bytes()
        .enumerate()
        .rev()
        .find_map(|(j, b)| {
            let n = nibble(b).unwrap_or(0);
            (n != 0).then(|| j * CELLS_PER_DIGIT + CELLS_PER_DIGIT - n.trailing_zeros() as usize)
        })
        .unwrap_or(0)
}

/// Bounding-box pattern of live cells.
///
/// Immutable once built. The empty pattern has no rows, no columns and
/// no row strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawPattern")]
pub struct Pattern {
    rows: usize,
    cols: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cells: Vec<String>,
}

/// Unchecked persisted shape
#[derive(Deserialize)]
struct RawPattern {
    rows: usize,
    cols: usize,
    #[serde(default)]
    cells: Vec<String>,
}

impl TryFrom<RawPattern> for Pattern {
    type Error = PatternError;

    fn try_from(raw: RawPattern) -> Result<Self, Self::Error> {
        Pattern::new(raw.rows, raw.cols, raw.cells)
    }
}

impl Pattern {
    /// The pattern with no live cells
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a pattern from its parts, checking the row strings
    pub fn new(rows: usize, cols: usize, cells: Vec<String>) -> Result<Self, PatternError> {
        if (rows == 0) != (cols == 0) {
            return Err(PatternError::EmptyMismatch { rows, cols });
        }
        if cells.len() != rows {
            return Err(PatternError::RowCountMismatch {
                rows,
                found: cells.len(),
            });
        }
        for (row, s) in cells.iter().enumerate() {
            if let Some(digit) = s.chars().find(|c| !c.is_ascii_hexdigit() || c.is_ascii_lowercase()) {
                return Err(PatternError::InvalidDigit { row, digit });
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Rows and columns already known to be consistent
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<String>) -> Self {
        debug_assert_eq!(cells.len(), rows);
        Self { rows, cols, cells }
    }

    /// Pack a boolean matrix without trimming it.
    ///
    /// The matrix extent becomes the pattern extent; ragged rows are
    /// padded with dead cells.
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Self::empty();
        }
        let cells = rows
            .iter()
            .map(|row| {
                (0..cols)
                    .step_by(CELLS_PER_DIGIT)
                    .map(|start| {
                        let value = (0..CELLS_PER_DIGIT)
                            .filter(|&i| row.get(start + i).copied().unwrap_or(false))
                            .fold(0u8, |acc, i| acc | (8 >> i));
                        hex_digit(value)
                    })
                    .collect()
            })
            .collect();
        Self::from_parts(rows.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row strings (empty for the empty pattern)
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether the cell at (row, col) is live.
    ///
    /// Columns at or beyond `cols` are dead even if their digit has the
    /// bit set; digits missing from a short row read as zero.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let digit = self.cells[row]
            .as_bytes()
            .get(col / CELLS_PER_DIGIT)
            .and_then(|&b| nibble(b))
            .unwrap_or(0);
        digit & (8 >> (col % CELLS_PER_DIGIT)) != 0
    }

    /// Offsets (row, col) of every live cell, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.is_alive(r, c))
                .map(move |c| (r, c))
        })
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.live_cells().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_width_trailing_bits() {
        assert_eq!(row_width(""), 0);
        assert_eq!(row_width("0"), 0);
        assert_eq!(row_width("8"), 1);
        assert_eq!(row_width("4"), 2);
        assert_eq!(row_width("C"), 2);
        assert_eq!(row_width("2"), 3);
        assert_eq!(row_width("1"), 4);
        assert_eq!(row_width("F"), 4);
        assert_eq!(row_width("F8"), 5);
        assert_eq!(row_width("F00"), 4);
        assert_eq!(row_width("0001"), 16);
    }

    #[test]
    fn test_new_validates() {
        assert!(Pattern::new(0, 0, vec![]).is_ok());
        assert_eq!(
            Pattern::new(2, 3, vec!["E".into()]),
            Err(PatternError::RowCountMismatch { rows: 2, found: 1 })
        );
        assert_eq!(
            Pattern::new(1, 3, vec!["e".into()]),
            Err(PatternError::InvalidDigit { row: 0, digit: 'e' })
        );
        assert_eq!(
            Pattern::new(1, 0, vec!["0".into()]),
            Err(PatternError::EmptyMismatch { rows: 1, cols: 0 })
        );
    }

    #[test]
    fn test_is_alive_respects_cols() {
        // Digit F but only 3 columns declared
        let p = Pattern::new(1, 3, vec!["F".into()]).unwrap();
        assert_eq!(p.live_cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2)]);
        assert!(!p.is_alive(0, 3));

        // Short row reads as dead past its digits
        let p = Pattern::new(2, 8, vec!["8".into(), "FF".into()]).unwrap();
        assert!(p.is_alive(0, 0));
        assert!(!p.is_alive(0, 4));
        assert_eq!(p.population(), 9);
    }

    #[test]
    fn test_from_rows_packs_msb_first() {
        let p = Pattern::from_rows(&[
            vec![false, true, false, false, true],
            vec![true, false, false, false, false],
        ]);
        assert_eq!(p.rows(), 2);
        assert_eq!(p.cols(), 5);
        assert_eq!(p.cells(), &["48".to_string(), "80".to_string()]);
        assert!(Pattern::from_rows(&[]).is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let p = Pattern::new(2, 2, vec!["C".into(), "C".into()]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"rows":2,"cols":2,"cells":["C","C"]}"#);
        let back: Pattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        let empty = serde_json::to_string(&Pattern::empty()).unwrap();
        assert_eq!(empty, r#"{"rows":0,"cols":0}"#);
        let back: Pattern = serde_json::from_str(&empty).unwrap();
        assert!(back.is_empty());

        assert!(serde_json::from_str::<Pattern>(r#"{"rows":1,"cols":4,"cells":["G"]}"#).is_err());
    }
}
