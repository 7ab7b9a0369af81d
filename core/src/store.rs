//! The in-memory todo store.
//!
//! `TodoStore` is the single owner of the item collection and the identifier
//! counter. Both live behind one `Mutex`, so every operation observes and
//! produces a consistent `(items, next_id)` pair.
//!
//! # Lock discipline
//!
//! - All operations, reads included, take the same exclusive lock.
//! - Nothing inside the critical section awaits, logs, or touches I/O.
//! - Callers only ever receive owned copies of items.

use crate::error::StoreError;
use crate::item::{TodoId, TodoItem};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// State guarded by the store lock.
#[derive(Debug)]
struct Inner {
    /// Surviving items in insertion order
    items: Vec<TodoItem>,
    /// Identifier handed out by the next `create`
    next_id: TodoId,
}

/// Thread-safe in-memory collection of todo items.
///
/// Construct one per process (or per test) and share it behind an `Arc`.
///
/// # Example
///
/// ```
/// use todo_core::{TodoId, TodoStore};
///
/// let store = TodoStore::new();
/// let a = store.create("A");
/// let b = store.create("B");
/// assert_eq!((a, b), (TodoId::new(1), TodoId::new(2)));
///
/// store.update(a, "A2", true)?;
/// store.delete(b)?;
///
/// let items = store.list_all();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].title, "A2");
/// assert!(items[0].is_complete);
/// # Ok::<(), todo_core::StoreError>(())
/// ```
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: TodoId::FIRST,
            }),
        }
    }

    /// Acquire the store lock.
    ///
    /// Every mutation completes before anything that could panic runs, so a
    /// poisoned guard still holds consistent state and is reused as-is.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all items in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<TodoItem> {
        self.lock().items.clone()
    }

    /// Append a new incomplete item and return its identifier.
    ///
    /// The title is stored verbatim; empty strings are accepted.
    pub fn create(&self, title: impl Into<String>) -> TodoId {
        let title = title.into();

        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            debug_assert!(
                inner.items.last().is_none_or(|last| last.id < id),
                "identifier {id} would not be greater than every existing identifier"
            );
            inner.items.push(TodoItem::new(id, title));
            inner.next_id = id.next();
            id
        };

        tracing::debug!(%id, "Todo created");
        id
    }

    /// Overwrite the title and completion flag of the item with `id`.
    ///
    /// The identifier and the item's position are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no item has this identifier.
    pub fn update(
        &self,
        id: TodoId,
        title: impl Into<String>,
        is_complete: bool,
    ) -> Result<(), StoreError> {
        let title = title.into();

        let updated = {
            let mut inner = self.lock();
            inner
                .items
                .iter_mut()
                .find(|item| item.id == id)
                .map(|item| {
                    item.title = title;
                    item.is_complete = is_complete;
                })
                .is_some()
        };

        if updated {
            tracing::debug!(%id, is_complete, "Todo updated");
            Ok(())
        } else {
            tracing::debug!(%id, "Update skipped, todo not found");
            Err(StoreError::NotFound { id })
        }
    }

    /// Remove the item with `id`; the remaining items keep their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no item has this identifier.
    pub fn delete(&self, id: TodoId) -> Result<(), StoreError> {
        let removed = {
            let mut inner = self.lock();
            inner
                .items
                .iter()
                .position(|item| item.id == id)
                .map(|index| inner.items.remove(index))
        };

        if removed.is_some() {
            tracing::debug!(%id, "Todo deleted");
            Ok(())
        } else {
            tracing::debug!(%id, "Delete skipped, todo not found");
            Err(StoreError::NotFound { id })
        }
    }

    /// Copy of the item with `id`, if present.
    #[must_use]
    pub fn get_by_id(&self, id: TodoId) -> Option<TodoItem> {
        self.lock().items.iter().find(|item| item.id == id).cloned()
    }

    /// Number of items currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = TodoStore::new();
        assert!(store.list_all().is_empty());
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_create_single_todo() {
        let store = TodoStore::new();
        let id = store.create("Test Todo");
        assert_eq!(id, TodoId::new(1));

        let todos = store.list_all();
        assert_eq!(todos, vec![TodoItem::new(id, "Test Todo".to_string())]);
    }

    #[test]
    fn test_create_multiple_todos() {
        let store = TodoStore::new();
        let ids: Vec<_> = ["First Todo", "Second Todo", "Third Todo"]
            .into_iter()
            .map(|title| store.create(title))
            .collect();

        assert_eq!(ids, vec![TodoId::new(1), TodoId::new(2), TodoId::new(3)]);

        let titles: Vec<_> = store.list_all().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["First Todo", "Second Todo", "Third Todo"]);
    }

    #[test]
    fn test_update_existing_todo() {
        let store = TodoStore::new();
        let id = store.create("Original Title");

        store.update(id, "Updated Title", true).unwrap();

        let todo = store.get_by_id(id).unwrap();
        assert_eq!(todo.title, "Updated Title");
        assert!(todo.is_complete);
    }

    #[test]
    fn test_update_can_reopen() {
        let store = TodoStore::new();
        let id = store.create("Task");
        store.update(id, "Task", true).unwrap();
        store.update(id, "Task", false).unwrap();
        assert!(!store.get_by_id(id).unwrap().is_complete);
    }

    #[test]
    fn test_update_nonexistent_todo() {
        let store = TodoStore::new();
        let err = store.update(TodoId::new(999), "Title", false).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: TodoId::new(999) });
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_existing_todo() {
        let store = TodoStore::new();
        let id1 = store.create("Todo 1");
        let id2 = store.create("Todo 2");

        store.delete(id1).unwrap();

        let todos = store.list_all();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, id2);
        assert_eq!(todos[0].title, "Todo 2");
    }

    #[test]
    fn test_delete_nonexistent_todo() {
        let store = TodoStore::new();
        store.create("Keep me");

        assert!(store.delete(TodoId::new(999)).unwrap_err().is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_twice_reports_not_found() {
        let store = TodoStore::new();
        let id = store.create("Once");
        assert!(store.delete(id).is_ok());
        assert_eq!(store.delete(id), Err(StoreError::NotFound { id }));
    }

    #[test]
    fn test_get_todo_by_id() {
        let store = TodoStore::new();
        let id1 = store.create("Todo 1");
        let id2 = store.create("Todo 2");

        assert_eq!(store.get_by_id(id1).unwrap().title, "Todo 1");
        assert_eq!(store.get_by_id(id2).unwrap().title, "Todo 2");
        assert!(store.get_by_id(TodoId::new(999)).is_none());
    }

    #[test]
    fn test_delete_then_update_other_item() {
        let store = TodoStore::new();
        let id1 = store.create("First Todo");
        let id2 = store.create("Second Todo");

        store.delete(id2).unwrap();
        store.update(id1, "Updated First Todo", true).unwrap();

        let todo = store.get_by_id(id1).unwrap();
        assert_eq!(todo.title, "Updated First Todo");
        assert!(todo.is_complete);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_deletion() {
        let store = TodoStore::new();
        let id1 = store.create("Todo 1");
        let id2 = store.create("Todo 2");
        store.delete(id1).unwrap();
        store.delete(id2).unwrap();

        assert_eq!(store.create("Todo 3"), TodoId::new(3));
        assert_eq!(store.create("Todo 4"), TodoId::new(4));

        let ids: Vec<_> = store.list_all().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TodoId::new(3), TodoId::new(4)]);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = TodoStore::new();
        let a = store.create("a");
        let b = store.create("b");
        let c = store.create("c");

        store.update(a, "a2", true).unwrap();

        let ids: Vec<_> = store.list_all().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = TodoStore::new();
        let id = store.create("Original");

        let mut snapshot = store.list_all();
        snapshot[0].title = "Changed locally".to_string();
        snapshot.clear();

        assert_eq!(store.get_by_id(id).unwrap().title, "Original");
        assert_eq!(store.len(), 1);
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_recovers_from_poisoned_lock() {
        let store = std::sync::Arc::new(TodoStore::new());
        store.create("Before");

        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the store lock");
        })
        .join();

        assert_eq!(store.create("After"), TodoId::new(2));
        assert_eq!(store.len(), 2);
    }
}
