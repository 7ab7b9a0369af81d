//! Shared application state.

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use todo_core::TodoStore;

/// State shared by every handler.
///
/// Handlers that only need the store extract `State<Arc<TodoStore>>`
/// through [`FromRef`].
#[derive(Clone)]
pub struct AppState {
    /// The process-wide todo store
    pub store: Arc<TodoStore>,
    /// Prometheus handle, `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create application state around a store.
    #[must_use]
    pub const fn new(store: Arc<TodoStore>, metrics: Option<PrometheusHandle>) -> Self {
        Self { store, metrics }
    }
}

impl FromRef<AppState> for Arc<TodoStore> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.store)
    }
}
