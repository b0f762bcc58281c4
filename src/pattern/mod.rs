//! Pattern format
//!
//! Patterns are bounding-box snapshots of live cells stored as rows of
//! uppercase hex digits. The same shape is used for save/load, for
//! text import/export and for the built-in insertion stamps.

pub mod codec;
pub mod hex;
pub mod library;

pub use codec::{EXPORT_LINE_END, decode, encode, place, to_text};
pub use hex::{Pattern, PatternError};
pub use library::{InsertionPattern, builtin_stamps, stamp_by_id, stamp_by_name};
