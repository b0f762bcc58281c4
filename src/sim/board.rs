//! Standard board sizes
//!
//! Three fixed geometries; patterns are fitted onto the smallest one
//! that holds them.

use serde::{Deserialize, Serialize};

/// Board size selector (ordered small to large)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum BoardSize {
    /// 50 columns x 30 rows
    Small,
    /// 75 columns x 45 rows
    #[default]
    Medium,
    /// 100 columns x 60 rows
    Large,
}

impl BoardSize {
    pub const ALL: [BoardSize; 3] = [BoardSize::Small, BoardSize::Medium, BoardSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardSize::Small => "50x30",
            BoardSize::Medium => "75x45",
            BoardSize::Large => "100x60",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "50x30" | "small" => Some(BoardSize::Small),
            "75x45" | "medium" | "med" => Some(BoardSize::Medium),
            "100x60" | "large" => Some(BoardSize::Large),
            _ => None,
        }
    }

    /// (rows, cols) of this board
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            BoardSize::Small => (30, 50),
            BoardSize::Medium => (45, 75),
            BoardSize::Large => (60, 100),
        }
    }

    /// Smallest board holding a `rows` x `cols` pattern.
    ///
    /// Patterns bigger than the large board still map to `Large`; the
    /// overflow is cropped on placement.
    pub fn minimal_for(rows: usize, cols: usize) -> Self {
        if rows <= 30 && cols <= 50 {
            BoardSize::Small
        } else if rows <= 45 && cols <= 75 {
            BoardSize::Medium
        } else {
            BoardSize::Large
        }
    }
}
