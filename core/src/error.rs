//! Error types for hard75-core.
//!
//! Domain failures are typed with thiserror so callers (and tests) can match
//! on them. Store plumbing stays on anyhow, like the file repositories.

use thiserror::Error;

/// A persisted document could not be turned back into a value.
///
/// Services never surface this to the user: they log it and fall back to
/// the built-in defaults.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no value stored under '{key}'")]
    Missing { key: &'static str },

    #[error("stored value under '{key}' is corrupt: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("store read failed for '{key}': {source}")]
    Store {
        key: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DecodeError {
    pub fn key(&self) -> &'static str {
        match self {
            DecodeError::Missing { key }
            | DecodeError::Corrupt { key, .. }
            | DecodeError::Store { key, .. } => key,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    /// Bad group/item address. A caller bug, not something a user can fix.
    #[error("index out of range: group {group}, item {item:?}")]
    IndexOutOfRange { group: usize, item: Option<usize> },

    #[error("a week must have exactly 7 days, got {0}")]
    WrongGroupCount(usize),

    #[error("item id {0} appears twice in one day")]
    DuplicateItem(uuid::Uuid),

    #[error("items cannot be removed from this checklist")]
    RemovalNotSupported,

    #[error("set descriptions only exist on workouts")]
    NotAWorkout,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BudgetError {
    /// NaN and infinities cannot be stored as JSON numbers.
    #[error("{field} must be a finite amount, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("no progress picture at index {index} ({len} stored)")]
    IndexOutOfRange { index: usize, len: usize },
}
