//! Named pattern store
//!
//! Each pattern is saved as JSON under `GOL_Pattern_6071_<name>`. Names
//! are 1 to 25 ASCII letters or digits.

use serde::{Deserialize, Serialize};

use super::StoreError;
use super::storage::Storage;
use crate::consts::{MAX_PATTERN_NAME_LEN, PATTERN_KEY_PREFIX};
use crate::pattern::Pattern;

/// A stored pattern together with its name.
///
/// Serializes flat: `{"name":..,"rows":..,"cols":..,"cells":[..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedPattern {
    pub name: String,
    #[serde(flatten)]
    pub pattern: Pattern,
}

/// Strip a user-typed name down to what the store accepts
pub fn sanitize_name(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_PATTERN_NAME_LEN)
        .collect()
}

/// Check that a name is 1 to 25 ASCII alphanumerics
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_PATTERN_NAME_LEN
        && name.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

fn storage_key(name: &str) -> String {
    format!("{PATTERN_KEY_PREFIX}{name}")
}

/// Pattern store over any LocalStorage-shaped backend
#[derive(Debug, Clone, Default)]
pub struct PatternStore<S: Storage> {
    storage: S,
}

impl<S: Storage> PatternStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Save (or overwrite) a pattern under `name`
    pub fn save(&mut self, name: &str, pattern: &Pattern) -> Result<(), StoreError> {
        validate_name(name)?;
        let json = serde_json::to_string(pattern)?;
        self.storage.set_item(&storage_key(name), &json)?;
        log::info!(
            "Saved pattern {} ({}x{})",
            name,
            pattern.rows(),
            pattern.cols()
        );
        Ok(())
    }

    /// Load a pattern; `None` when nothing is stored under `name`
    pub fn load(&self, name: &str) -> Result<Option<Pattern>, StoreError> {
        let Some(json) = self.storage.get_item(&storage_key(name))? else {
            return Ok(None);
        };
        let pattern = serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })?;
        Ok(Some(pattern))
    }

    pub fn delete(&mut self, name: &str) -> Result<(), StoreError> {
        self.storage.remove_item(&storage_key(name))?;
        log::info!("Deleted pattern {}", name);
        Ok(())
    }

    /// All readable stored patterns, sorted by name.
    ///
    /// Corrupt entries are skipped.
    pub fn list(&self) -> Result<Vec<NamedPattern>, StoreError> {
        let mut patterns = Vec::new();
        for key in self.storage.keys()? {
            let Some(name) = key.strip_prefix(PATTERN_KEY_PREFIX) else {
                continue;
            };
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                continue;
            }
            match self.load(name) {
                Ok(Some(pattern)) => patterns.push(NamedPattern {
                    name: name.to_string(),
                    pattern,
                }),
                Ok(None) => {}
                Err(err) => log::warn!("Skipping stored pattern: {}", err),
            }
        }
        patterns.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(patterns)
    }
}
