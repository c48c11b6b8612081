//! Option model: which transformation options exist and which are present.
//!
//! Values are stored as typed but never validated. Range and vocabulary
//! limits live in [`crate::catalog`] and are enforced (or merely reported)
//! by whatever front end edits the set.

mod key;
mod set;
mod value;

pub use key::{OptionKey, ValueKind};
pub use set::OptionSet;
pub use value::OptionValue;

/// Errors raised while naming options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("unknown option key: {0}")]
    UnknownKey(String),
}
