//! Browser binding
//!
//! Wraps a [`SimulationSession`] for a JS UI. The page owns the timer
//! (`setInterval` at `interval_ms()`) and calls `step()` on each tick;
//! drawing uses `cells()`.

use wasm_bindgen::prelude::*;

use crate::pattern::{self, library};
use crate::persistence::{LocalStorage, PatternStore, StoreError, sanitize_name};
use crate::settings::{Settings, SimSpeed};
use crate::sim::{BoardSize, SimulationSession};

fn to_js(err: StoreError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Session plus saved patterns and settings
#[wasm_bindgen]
pub struct WebLife {
    session: SimulationSession,
    store: PatternStore<LocalStorage>,
    settings: Settings,
}

#[wasm_bindgen]
impl WebLife {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebLife, JsValue> {
        super::init_logging();
        let storage = LocalStorage::open().map_err(to_js)?;
        let settings = Settings::load(&storage);
        let seed = js_sys::Date::now() as u64;
        log::info!("Life board starting with seed {}", seed);

        Ok(Self {
            session: SimulationSession::from_settings(&settings, seed),
            store: PatternStore::new(storage),
            settings,
        })
    }

    pub fn rows(&self) -> usize {
        self.session.grid().rows()
    }

    pub fn cols(&self) -> usize {
        self.session.grid().cols()
    }

    /// Row-major cells, 1 = alive
    pub fn cells(&self) -> Vec<u8> {
        self.session.grid().to_bytes()
    }

    pub fn generation(&self) -> f64 {
        self.session.generation() as f64
    }

    pub fn population(&self) -> usize {
        self.session.population()
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Advance one generation; returns false once the session is stopped
    pub fn step(&mut self) -> bool {
        self.session.step();
        self.session.is_running()
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        self.session.toggle_cell(row, col);
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn seed(&mut self) {
        self.session.seed();
    }

    pub fn board_size(&self) -> String {
        self.session.board_size().as_str().to_string()
    }

    /// Switch board size ("50x30", "75x45", "100x60"); false if unknown
    pub fn set_board_size(&mut self, size: &str) -> bool {
        let Some(size) = BoardSize::from_str(size) else {
            return false;
        };
        if size != self.session.board_size() {
            self.session.resize_to(size);
        }
        self.settings.board_size = size;
        self.save_settings();
        true
    }

    pub fn toroidal(&self) -> bool {
        self.session.toroidal()
    }

    pub fn set_toroidal(&mut self, toroidal: bool) {
        self.session.set_toroidal(toroidal);
        self.settings.toroidal = toroidal;
        self.save_settings();
    }

    pub fn speed(&self) -> String {
        self.settings.sim_speed.as_str().to_string()
    }

    /// Change speed ("Fast", "Medium", "Slow"); the page reschedules its timer
    pub fn set_speed(&mut self, speed: &str) -> bool {
        let Some(speed) = SimSpeed::from_str(speed) else {
            return false;
        };
        self.settings.sim_speed = speed;
        self.save_settings();
        true
    }

    pub fn interval_ms(&self) -> u32 {
        self.settings.sim_speed.interval_ms()
    }

    /// Reduce typed input to a storable name
    pub fn sanitize_name(input: &str) -> String {
        sanitize_name(input)
    }

    pub fn save_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        self.session.stop();
        let snapshot = self.session.snapshot();
        self.store.save(name, &snapshot).map_err(to_js)
    }

    /// Load a saved pattern; false if nothing is stored under `name`
    pub fn load_pattern(&mut self, name: &str) -> Result<bool, JsValue> {
        self.session.stop();
        match self.store.load(name).map_err(to_js)? {
            Some(pattern) => {
                self.session.load_pattern(&pattern);
                self.sync_board_size();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete_pattern(&mut self, name: &str) -> Result<(), JsValue> {
        self.store.delete(name).map_err(to_js)
    }

    pub fn pattern_names(&self) -> Result<Vec<String>, JsValue> {
        let patterns = self.store.list().map_err(to_js)?;
        Ok(patterns.into_iter().map(|p| p.name).collect())
    }

    pub fn export_text(&mut self) -> String {
        self.session.stop();
        self.session.export_text()
    }

    pub fn import_text(&mut self, text: &str) {
        self.session.stop();
        self.session.import_text(text);
        self.sync_board_size();
    }

    pub fn stamp_count(&self) -> usize {
        library::stamp_count()
    }

    pub fn stamp_name(&self, id: u32) -> Option<String> {
        library::stamp_by_id(id).map(|stamp| stamp.name)
    }

    /// Stamp a built-in pattern near (row, col); false if `id` is unknown
    pub fn insert_stamp(&mut self, id: u32, row: usize, col: usize) -> bool {
        match pattern::stamp_by_id(id) {
            Some(stamp) => {
                self.session.insert_pattern(&stamp.pattern, row, col);
                true
            }
            None => false,
        }
    }
}

impl WebLife {
    fn save_settings(&mut self) {
        if let Err(err) = self.settings.save(self.store.storage_mut()) {
            log::warn!("Could not save settings: {}", err);
        }
    }

    fn sync_board_size(&mut self) {
        if self.settings.board_size != self.session.board_size() {
            self.settings.board_size = self.session.board_size();
            self.save_settings();
        }
    }
}
