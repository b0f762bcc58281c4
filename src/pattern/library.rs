//! Built-in insertion stamps
//!
//! Small well-known patterns the user can XOR-stamp onto the board. Each
//! carries the preview metadata a selector needs to draw it in a fixed
//! 210x210 preview area.

use serde::{Deserialize, Serialize};

use super::hex::Pattern;

/// A selectable stamp plus its preview metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionPattern {
    /// Position in the built-in list
    pub pattern_id: u32,
    pub name: String,
    pub pattern: Pattern,
    /// Preview cell size in pixels
    pub cell_size: u32,
    /// Rows shown in the preview area
    pub disp_row_count: u32,
    /// Columns shown in the preview area
    pub disp_col_count: u32,
}

struct StampDef {
    name: &'static str,
    rows: usize,
    cols: usize,
    cells: &'static [&'static str],
    cell_size: u32,
    disp_rows: u32,
    disp_cols: u32,
}

const STAMPS: &[StampDef] = &[
    StampDef {
        name: "Single cell",
        rows: 1,
        cols: 1,
        cells: &["8"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Block",
        rows: 2,
        cols: 2,
        cells: &["C", "C"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Blinker (horizontal)",
        rows: 1,
        cols: 3,
        cells: &["E"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Blinker (vertical)",
        rows: 3,
        cols: 1,
        cells: &["8", "8", "8"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Tub",
        rows: 3,
        cols: 3,
        cells: &["4", "A", "4"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Boat 1",
        rows: 3,
        cols: 3,
        cells: &["C", "A", "4"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Boat 2",
        rows: 3,
        cols: 3,
        cells: &["4", "A", "6"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Glider 1",
        rows: 3,
        cols: 3,
        cells: &["4", "2", "E"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Glider 2",
        rows: 3,
        cols: 3,
        cells: &["8", "A", "C"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Glider 3",
        rows: 3,
        cols: 3,
        cells: &["E", "8", "4"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Glider 4",
        rows: 3,
        cols: 3,
        cells: &["6", "A", "2"],
        cell_size: 27,
        disp_rows: 7,
        disp_cols: 7,
    },
    StampDef {
        name: "Beehive 1",
        rows: 3,
        cols: 4,
        cells: &["6", "9", "6"],
        cell_size: 24,
        disp_rows: 7,
        disp_cols: 8,
    },
    StampDef {
        name: "Beehive 2",
        rows: 4,
        cols: 3,
        cells: &["4", "A", "A", "4"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 7,
    },
    StampDef {
        name: "Loaf 1",
        rows: 4,
        cols: 4,
        cells: &["6", "9", "A", "4"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Loaf 2",
        rows: 4,
        cols: 4,
        cells: &["2", "5", "9", "6"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Toad 1",
        rows: 4,
        cols: 4,
        cells: &["2", "9", "9", "4"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Toad 2",
        rows: 4,
        cols: 4,
        cells: &["6", "1", "8", "6"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Beacon 1",
        rows: 4,
        cols: 4,
        cells: &["C", "8", "1", "3"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Beacon 2",
        rows: 4,
        cols: 4,
        cells: &["3", "1", "8", "C"],
        cell_size: 24,
        disp_rows: 8,
        disp_cols: 8,
    },
    StampDef {
        name: "Lightweight spaceship 1",
        rows: 4,
        cols: 5,
        cells: &["78", "88", "08", "90"],
        cell_size: 21,
        disp_rows: 8,
        disp_cols: 9,
    },
    StampDef {
        name: "Lightweight spaceship 2",
        rows: 5,
        cols: 4,
        cells: &[
            "A",
            "1",
            "1",
            "9",
            "7",
        ],
        cell_size: 21,
        disp_rows: 9,
        disp_cols: 8,
    },
    StampDef {
        name: "Lightweight spaceship 3",
        rows: 4,
        cols: 5,
        cells: &["48", "80", "88", "F0"],
        cell_size: 21,
        disp_rows: 8,
        disp_cols: 9,
    },
    StampDef {
        name: "Lightweight spaceship 4",
        rows: 5,
        cols: 4,
        cells: &[
            "E",
            "9",
            "8",
            "8",
            "5",
        ],
        cell_size: 21,
        disp_rows: 9,
        disp_cols: 8,
    },
    StampDef {
        name: "Pentadecathlon (vertical)",
        rows: 10,
        cols: 3,
        cells: &[
            "4",
            "4",
            "A",
            "4",
            "4",
            "4",
            "4",
            "A",
            "4",
            "4",
        ],
        cell_size: 15,
        disp_rows: 10,
        disp_cols: 11,
    },
    StampDef {
        name: "Pentadecathlon (horizontal)",
        rows: 3,
        cols: 10,
        cells: &["210", "DEC", "210"],
        cell_size: 15,
        disp_rows: 11,
        disp_cols: 10,
    },
    StampDef {
        name: "Gosper glider gun",
        rows: 9,
        cols: 36,
        cells: &[
            "000000800",
            "000002800",
            "000C0C003",
            "00110C003",
            "C0208C000",
            "C022C2800",
            "002080800",
            "001100000",
            "000C00000",
        ],
        cell_size: 4,
        disp_rows: 9,
        disp_cols: 36,
    },
];

impl StampDef {
    fn to_insertion(&self, pattern_id: u32) -> InsertionPattern {
        let cells = self.cells.iter().map(|row| row.to_string()).collect();
        InsertionPattern {
            pattern_id,
            name: self.name.to_string(),
            pattern: Pattern::from_parts(self.rows, self.cols, cells),
            cell_size: self.cell_size,
            disp_row_count: self.disp_rows,
            disp_col_count: self.disp_cols,
        }
    }
}

/// Number of built-in stamps
pub fn stamp_count() -> usize {
    STAMPS.len()
}

/// All built-in stamps, in selector order
pub fn builtin_stamps() -> Vec<InsertionPattern> {
    STAMPS
        .iter()
        .enumerate()
        .map(|(id, def)| def.to_insertion(id as u32))
        .collect()
}

/// Look up a built-in stamp by id
pub fn stamp_by_id(pattern_id: u32) -> Option<InsertionPattern> {
    STAMPS
        .get(pattern_id as usize)
        .map(|def| def.to_insertion(pattern_id))
}

/// Look up a built-in stamp by name (case-insensitive)
pub fn stamp_by_name(name: &str) -> Option<InsertionPattern> {
    STAMPS
        .iter()
        .position(|def| def.name.eq_ignore_ascii_case(name))
        .map(|id| STAMPS[id].to_insertion(id as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::hex::row_width;
    use crate::sim::{BoardSize, Grid, step};

    #[test]
    fn test_stamps_are_valid_patterns() {
        for stamp in builtin_stamps() {
            let p = &stamp.pattern;
            let rebuilt = Pattern::new(p.rows(), p.cols(), p.cells().to_vec());
            assert_eq!(rebuilt.as_ref(), Ok(p), "{}", stamp.name);
            // Every stamp is a tight bounding box
            let width = p.cells().iter().map(|row| row_width(row)).max();
            assert_eq!(width, Some(p.cols()), "{}", stamp.name);
            assert!(p.live_cells().any(|(r, _)| r == p.rows() - 1), "{}", stamp.name);
            assert!(p.live_cells().any(|(_, c)| c == 0), "{}", stamp.name);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(stamp_count(), 26);
        let glider = stamp_by_id(7).unwrap();
        assert_eq!(glider.name, "Glider 1");
        assert_eq!(glider.pattern.population(), 5);
        assert_eq!(stamp_by_name("gosper GLIDER gun").unwrap().pattern_id, 25);
        assert!(stamp_by_id(26).is_none());
        assert!(stamp_by_name("nope").is_none());
    }

    #[test]
    fn test_gun_population_and_fit() {
        let gun = stamp_by_name("Gosper glider gun").unwrap();
        assert_eq!(gun.pattern.population(), 36);
        assert_eq!(
            BoardSize::minimal_for(gun.pattern.rows(), gun.pattern.cols()),
            BoardSize::Small
        );
    }

    #[test]
    fn test_blinker_stamps_are_phases() {
        let horizontal = stamp_by_name("Blinker (horizontal)").unwrap().pattern;
        let vertical = stamp_by_name("Blinker (vertical)").unwrap().pattern;

        let mut grid = Grid::new(5, 5).unwrap();
        crate::pattern::place(&horizontal, &mut grid, 2, 1);
        let (next, _) = step(&grid, false);
        assert_eq!(crate::pattern::encode(&next), vertical);
    }
}
