//! Store error types.

use crate::item::TodoId;
use thiserror::Error;

/// Errors returned by [`TodoStore`](crate::TodoStore) operations.
///
/// Only update and delete can fail, and only because the identifier is
/// absent. Create and list never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with the given identifier exists.
    #[error("Todo {id} not found")]
    NotFound {
        /// The identifier that was looked up.
        id: TodoId,
    },
}

impl StoreError {
    /// Returns `true` for [`StoreError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
