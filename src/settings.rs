//! Session settings and preferences
//!
//! Persisted separately from patterns in the same key/value storage.

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StoreError};
use crate::sim::BoardSize;

/// Simulation speed levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SimSpeed {
    Fast,
    #[default]
    Medium,
    Slow,
}

impl SimSpeed {
    pub const ALL: [SimSpeed; 3] = [SimSpeed::Fast, SimSpeed::Medium, SimSpeed::Slow];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimSpeed::Fast => "Fast",
            SimSpeed::Medium => "Medium",
            SimSpeed::Slow => "Slow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fast" => Some(SimSpeed::Fast),
            "medium" | "med" => Some(SimSpeed::Medium),
            "slow" => Some(SimSpeed::Slow),
            _ => None,
        }
    }

    /// Timer interval between generations
    pub fn interval_ms(&self) -> u32 {
        match self {
            SimSpeed::Fast => 250,
            SimSpeed::Medium => 500,
            SimSpeed::Slow => 1000,
        }
    }
}

/// Board preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub board_size: BoardSize,
    pub sim_speed: SimSpeed,
    /// Edges wrap around for neighbor counting
    pub toroidal: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::Medium,
            sim_speed: SimSpeed::Medium,
            toroidal: true,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "GOL_Settings_6071";

    /// Load settings, falling back to defaults on missing or corrupt data
    pub fn load(storage: &impl Storage) -> Self {
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings;
                }
                Err(err) => log::warn!("Ignoring corrupt settings: {}", err),
            },
            Ok(None) => {}
            Err(err) => log::warn!("Settings unavailable: {}", err),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, storage: &mut impl Storage) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        storage.set_item(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_speed_intervals() {
        assert_eq!(SimSpeed::Fast.interval_ms(), 250);
        assert_eq!(SimSpeed::Medium.interval_ms(), 500);
        assert_eq!(SimSpeed::Slow.interval_ms(), 1000);
        for speed in SimSpeed::ALL {
            assert_eq!(SimSpeed::from_str(speed.as_str()), Some(speed));
        }
    }

    #[test]
    fn test_defaults_when_missing_or_corrupt() {
        let mut storage = MemoryStorage::new();
        assert_eq!(Settings::load(&storage), Settings::default());

        storage.set_item("GOL_Settings_6071", "garbage").unwrap();
        assert_eq!(Settings::load(&storage), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            board_size: BoardSize::Large,
            sim_speed: SimSpeed::Fast,
            toroidal: false,
        };
        settings.save(&mut storage).unwrap();
        assert_eq!(Settings::load(&storage), settings);
    }
}
