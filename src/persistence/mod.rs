//! Pattern and settings persistence
//!
//! Features:
//! - LocalStorage-shaped `Storage` trait (browser LocalStorage on wasm32,
//!   in-memory map elsewhere)
//! - Named pattern store with JSON records
//! - Name sanitizing/validation

pub mod storage;
pub mod store;

pub use storage::{MemoryStorage, Storage};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use store::{NamedPattern, PatternStore, sanitize_name, validate_name};

use thiserror::Error;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Name is empty, too long, or not alphanumeric
    #[error("invalid pattern name {0:?}: expected 1 to 25 letters or digits")]
    InvalidName(String),

    /// Backend could not be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Stored record is not a valid pattern
    #[error("stored pattern {name:?} is corrupt: {source}")]
    Corrupt {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Record could not be serialized
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}
