//! Prometheus metrics for the todo API.
//!
//! The `metrics` macros are no-ops until a recorder is installed, so
//! handlers record unconditionally and `METRICS_ENABLED=false` simply skips
//! [`install_recorder`].

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use thiserror::Error;
use todo_web::AppError;

use crate::state::AppState;

/// Prometheus text exposition content type.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Describe every todo metric to the installed recorder.
pub fn register_metrics() {
    describe_counter!("todos_created_total", "Total number of todos created");
    describe_counter!("todos_updated_total", "Total number of todos updated");
    describe_counter!("todos_deleted_total", "Total number of todos deleted");
    describe_counter!(
        "todos_not_found_total",
        "Updates, deletes and lookups that targeted a missing todo"
    );
    describe_gauge!("todos_items", "Number of todos currently stored");
}

/// Install the global Prometheus recorder and describe the todo metrics.
///
/// # Errors
///
/// Returns [`MetricsError::Install`] if a global recorder is already set.
pub fn install_recorder() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    register_metrics();
    tracing::info!("Prometheus recorder installed");
    Ok(handle)
}

/// Counters and gauges updated by the todo handlers.
///
/// `todos_items` moves by one per successful create or delete, so it
/// tracks the store only if the store starts empty, as it does in `main`.
pub struct TodoMetrics;

impl TodoMetrics {
    /// Record a created todo.
    pub fn record_created() {
        counter!("todos_created_total").increment(1);
        gauge!("todos_items").increment(1.0);
    }

    /// Record an updated todo.
    pub fn record_updated() {
        counter!("todos_updated_total").increment(1);
    }

    /// Record a deleted todo.
    pub fn record_deleted() {
        counter!("todos_deleted_total").increment(1);
        gauge!("todos_items").decrement(1.0);
    }

    /// Record an operation that targeted a missing todo.
    pub fn record_not_found(operation: &'static str) {
        counter!("todos_not_found_total", "operation" => operation).increment(1);
    }
}

/// `GET /metrics`: Prometheus exposition, or 404 when no recorder is installed.
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.metrics {
        Some(handle) => (
            [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
            handle.render(),
        )
            .into_response(),
        None => AppError::not_found("Metrics are disabled").into_response(),
    }
}
