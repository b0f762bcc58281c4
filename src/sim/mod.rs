//! Simulation module
//!
//! Board geometry, the generation rule and the run/stop session. This
//! module must stay pure:
//! - Every generation is a fresh grid
//! - Seeded RNG only
//! - No rendering, timer or platform dependencies

pub mod board;
pub mod grid;
pub mod session;
pub mod step;

pub use board::BoardSize;
pub use grid::{Grid, GridError};
pub use session::{SimPhase, SimulationSession, StepReport};
pub use step::{live_neighbors, step};
