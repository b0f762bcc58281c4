//! Life Board - Game of Life sandbox engine
//!
//! Core modules:
//! - `sim`: Board geometry, generation stepping and the simulation session
//! - `pattern`: Hex pattern format, text import/export, built-in stamps
//! - `persistence`: Named pattern store over LocalStorage-like backends
//! - `settings`: Board size, speed and edge-wrap preferences
//! - `platform`: Logging setup and the browser binding

pub mod pattern;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use pattern::{InsertionPattern, Pattern, PatternError};
pub use persistence::{NamedPattern, PatternStore, StoreError};
pub use settings::{Settings, SimSpeed};
pub use sim::{BoardSize, Grid, GridError, SimPhase, SimulationSession, StepReport};

/// Engine configuration constants
pub mod consts {
    /// Storage key prefix for saved patterns
    pub const PATTERN_KEY_PREFIX: &str = "GOL_Pattern_6071_";
    /// Longest accepted pattern name
    pub const MAX_PATTERN_NAME_LEN: usize = 25;
    /// Generations the native runner plays when none are given
    pub const DEFAULT_GENERATIONS: u64 = 30;
}
