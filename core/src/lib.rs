//! # Todo Core
//!
//! In-memory storage for todo items.
//!
//! The crate has one stateful type, [`TodoStore`], which owns the item
//! collection together with the identifier counter and serializes every
//! operation through a single lock.
//!
//! ## Invariants
//!
//! - Identifiers of stored items are pairwise distinct.
//! - The next identifier is greater than every identifier ever handed out,
//!   so deleting an item never frees its identifier for reuse.
//! - Surviving items are listed in insertion order; updates never reorder.
//!
//! ## Example
//!
//! ```
//! use todo_core::TodoStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(TodoStore::new());
//! let id = store.create("Buy milk");
//!
//! assert!(store.update(id, "Buy oat milk", true).is_ok());
//! assert!(store.delete(id).is_ok());
//! assert!(store.delete(id).is_err());
//! assert_eq!(store.create("Next"), id.next());
//! ```

pub mod error;
pub mod item;
pub mod store;

// Re-export commonly used types
pub use error::StoreError;
pub use item::{TodoId, TodoItem};
pub use store::TodoStore;
