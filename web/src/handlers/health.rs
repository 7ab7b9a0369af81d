//! Health check endpoints.
//!
//! These endpoints are used by load balancers and orchestrators to verify
//! service health.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;
use todo_core::TodoStore;

/// Liveness probe: the process is up and serving requests.
///
/// Does not touch the store.
///
/// # Endpoint
///
/// ```text
/// GET /alive
/// ```
#[allow(clippy::unused_async)]
pub async fn liveness_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Always `"healthy"` when the store answered
    pub status: &'static str,
    /// Number of items currently stored
    pub items: usize,
}

/// Readiness probe: the store lock can be taken and the store answers.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// { "status": "healthy", "items": 3 }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(State(store): State<Arc<TodoStore>>) -> (StatusCode, Json<HealthReport>) {
    let report = HealthReport {
        status: "healthy",
        items: store.len(),
    };
    (StatusCode::OK, Json(report))
}
