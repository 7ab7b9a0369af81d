//! Todo item and identifier types.
//!
//! `TodoId` is allocated by the store and never supplied by callers.
//! `TodoItem` serializes as `{"id", "title", "isComplete"}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a todo item.
///
/// Identifiers start at 1 and increase by one for every created item.
/// They are never reused, even after the owning item is deleted.
///
/// Serializes as a bare integer.
///
/// # Examples
///
/// ```
/// use todo_core::TodoId;
///
/// let first = TodoId::FIRST;
/// assert_eq!(first.value(), 1);
/// assert_eq!(first.next(), TodoId::new(2));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// The identifier given to the first item a store creates.
    pub const FIRST: Self = Self(1);

    /// Create a `TodoId` from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Get the identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for TodoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A single todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned identifier
    pub id: TodoId,
    /// Free-form title, may be empty
    pub title: String,
    /// Whether the todo is done
    pub is_complete: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo item.
    #[must_use]
    pub const fn new(id: TodoId, title: String) -> Self {
        Self {
            id,
            title,
            is_complete: false,
        }
    }
}
