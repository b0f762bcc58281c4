//! Simulation session
//!
//! Owns the board, the generation counter and the run/stop state. The
//! caller owns the timer and calls [`SimulationSession::step`] on every
//! tick; nothing here is asynchronous.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::BoardSize;
use super::grid::Grid;
use super::step::step;
use crate::pattern::{self, Pattern};
use crate::settings::Settings;

/// Run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    Stopped,
    Running,
}

/// Result of one generation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Generation now on the board
    pub generation: u64,
    pub live_cells: usize,
    /// The board died out and the session stopped itself
    pub extinct: bool,
}

/// Board state plus run control
#[derive(Debug, Clone)]
pub struct SimulationSession {
    grid: Grid,
    board_size: BoardSize,
    phase: SimPhase,
    generation: u64,
    toroidal: bool,
    rng: Pcg32,
}

impl SimulationSession {
    /// Empty, stopped session; `seed` drives [`Self::seed`]
    pub fn new(board_size: BoardSize, toroidal: bool, seed: u64) -> Self {
        Self {
            grid: Grid::for_board(board_size),
            board_size,
            phase: SimPhase::Stopped,
            generation: 0,
            toroidal,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        Self::new(settings.board_size, settings.toroidal, seed)
    }

    /// Current board (never mutated after a step replaces it)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn board_size(&self) -> BoardSize {
        self.board_size
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toroidal(&self) -> bool {
        self.toroidal
    }

    pub fn set_toroidal(&mut self, toroidal: bool) {
        self.toroidal = toroidal;
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn start(&mut self) {
        if self.phase != SimPhase::Running {
            self.phase = SimPhase::Running;
            log::info!("Simulation started at generation {}", self.generation);
        }
    }

    pub fn stop(&mut self) {
        if self.phase != SimPhase::Stopped {
            self.phase = SimPhase::Stopped;
            log::info!("Simulation stopped at generation {}", self.generation);
        }
    }

    /// Advance one generation. Does nothing unless running.
    ///
    /// When the new generation has no live cells it stays on the board
    /// and the session stops.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.phase != SimPhase::Running {
            return None;
        }

        let (next, live_cells) = step(&self.grid, self.toroidal);
        self.grid = next;
        self.generation += 1;
        log::debug!("Generation {}: {} live cells", self.generation, live_cells);

        let extinct = live_cells == 0;
        if extinct {
            self.phase = SimPhase::Stopped;
            log::info!("All cells dead at generation {}, pausing", self.generation);
        }

        Some(StepReport {
            generation: self.generation,
            live_cells,
            extinct,
        })
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid = Grid::for_board(self.board_size);
        self.generation = 0;
    }

    /// Refill the board at random.
    ///
    /// Each cell is alive when `round(u * 100) % 3 > 1` for a uniform
    /// `u` in [0, 1), which lands a little under one third live.
    pub fn seed(&mut self) {
        let mut next = Grid::for_board(self.board_size);
        for row in 0..next.rows() {
            for col in 0..next.cols() {
                let roll = (self.rng.random::<f64>() * 100.0).round() as u32;
                next.set(row, col, roll % 3 > 1);
            }
        }
        self.grid = next;
        log::info!("Seeded board with {} live cells", self.grid.population());
    }

    /// Toggle one cell; out-of-board coordinates are ignored
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if row < self.grid.rows() && col < self.grid.cols() {
            let mut next = self.grid.clone();
            next.toggle(row, col);
            self.grid = next;
        }
    }

    /// Switch to an empty board of another size
    pub fn resize_to(&mut self, size: BoardSize) {
        self.board_size = size;
        self.grid = Grid::for_board(size);
        self.generation = 0;
        let (rows, cols) = size.dimensions();
        log::info!("Board resized to {}x{}", cols, rows);
    }

    /// Replace the board with `pattern`, centered.
    ///
    /// The board grows to the smallest standard size holding the pattern
    /// but never shrinks.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        let minimal = BoardSize::minimal_for(pattern.rows(), pattern.cols());
        if minimal > self.board_size {
            self.resize_to(minimal);
        }

        let mut next = Grid::for_board(self.board_size);
        let top = (next.rows() as isize - pattern.rows() as isize).div_euclid(2);
        let left = (next.cols() as isize - pattern.cols() as isize).div_euclid(2);
        pattern::place(pattern, &mut next, top, left);

        self.grid = next;
        self.generation = 0;
        log::info!(
            "Loaded {}x{} pattern at ({}, {})",
            pattern.cols(),
            pattern.rows(),
            top,
            left
        );
    }

    /// XOR-stamp `pattern` with its top-left corner near (at_row, at_col).
    ///
    /// The corner is pulled back so the pattern fits on the board where
    /// possible. Returns the corner actually used.
    pub fn insert_pattern(&mut self, pattern: &Pattern, at_row: usize, at_col: usize) -> (usize, usize) {
        let row = at_row.min(self.grid.rows().saturating_sub(pattern.rows()));
        let col = at_col.min(self.grid.cols().saturating_sub(pattern.cols()));

        let mut next = self.grid.clone();
        for (r, c) in pattern.live_cells() {
            let (target_row, target_col) = (row + r, col + c);
            if target_row < next.rows() && target_col < next.cols() {
                next.toggle(target_row, target_col);
            }
        }
        self.grid = next;

        (row, col)
    }

    /// Encode the live part of the board
    pub fn snapshot(&self) -> Pattern {
        pattern::encode(&self.grid)
    }

    /// Board as export text (one CRLF-terminated hex row per line)
    pub fn export_text(&self) -> String {
        pattern::to_text(&self.snapshot())
    }

    /// Decode export text and load it; returns the decoded pattern
    pub fn import_text(&mut self, text: &str) -> Pattern {
        let pattern = pattern::decode(text);
        if pattern.is_empty() {
            log::info!("Imported text holds no live cells");
        }
        self.load_pattern(&pattern);
        pattern
    }
}
