//! # Todo Testing
//!
//! Testing utilities and helpers for the todo service.
//!
//! This crate provides:
//! - Store fixtures
//! - A Given-When-Then builder for store scenarios
//! - Property-based testing strategies
//! - Test tracing setup
//!
//! ## Example
//!
//! ```
//! use todo_testing::fixtures::seeded_store;
//!
//! let (store, ids) = seeded_store(["First", "Second"]);
//! store.delete(ids[1]).ok();
//! assert_eq!(store.len(), 1);
//! ```


pub use store_test::{assertions, StoreOp, StoreOutcome, StoreTest};

/// Store fixtures.
pub mod fixtures {
    use todo_core::{TodoId, TodoStore};

    /// Build a store holding one item per title, returning the allocated ids.
    #[must_use]
    pub fn seeded_store<I, T>(titles: I) -> (TodoStore, Vec<TodoId>)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let store = TodoStore::new();
        let ids = titles.into_iter().map(|title| store.create(title)).collect();
        (store, ids)
    }

    /// Titles with characters that tend to break naive encoders.
    #[must_use]
    pub fn special_titles() -> Vec<&'static str> {
        vec![
            "Todo with émojis 🎉🚀",
            "Todo with <html>tags</html>",
            "Todo with \"quotes\" and 'apostrophes'",
            "Todo with line\nbreaks",
            "Todo with tabs\tand spaces",
        ]
    }
}

/// Property-based testing strategies using proptest.
pub mod properties {
    use super::StoreOp;
    use proptest::prelude::*;
    use todo_core::TodoId;

    /// Any title, including empty strings and control characters.
    pub fn arb_title() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[a-zA-Z0-9 ]{1,24}",
            any::<String>(),
        ]
    }

    /// Identifier in `1..=max_id`, so scripts hit both live and missing items.
    pub fn arb_id(max_id: u64) -> impl Strategy<Value = TodoId> {
        (1..=max_id.max(1)).prop_map(TodoId::new)
    }

    /// A single store operation targeting identifiers up to `max_id`.
    pub fn arb_op(max_id: u64) -> impl Strategy<Value = StoreOp> {
        prop_oneof![
            3 => arb_title().prop_map(|title| StoreOp::Create { title }),
            2 => (arb_id(max_id), arb_title(), any::<bool>()).prop_map(
                |(id, title, is_complete)| StoreOp::Update {
                    id,
                    title,
                    is_complete,
                }
            ),
            2 => arb_id(max_id).prop_map(|id| StoreOp::Delete { id }),
        ]
    }

    /// A script of up to `max_len` operations.
    pub fn arb_script(max_len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
        let max_id = u64::try_from(max_len).unwrap_or(u64::MAX);
        prop::collection::vec(arb_op(max_id), 0..=max_len)
    }
}

/// Install a test-friendly tracing subscriber.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}
