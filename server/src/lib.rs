//! HTTP service exposing an in-memory todo list.
//!
//! # Endpoints
//!
//! - `GET /api/Todos` - List todos
//! - `POST /api/Todos` - Create a todo, returns its id
//! - `GET /api/Todos/:id` - Get a todo
//! - `PUT /api/Todos/:id` - Update a todo
//! - `DELETE /api/Todos/:id` - Delete a todo
//! - `GET /health` - Readiness
//! - `GET /alive` - Liveness
//! - `GET /metrics` - Prometheus metrics
//!
//! # Example
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/Todos \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Buy milk"}'
//!
//! curl -X PUT http://localhost:8000/api/Todos/1 \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "Buy milk", "isComplete": true}'
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod api;
pub mod config;
pub mod metrics;
pub mod routes;
pub mod state;

pub use config::{Config, ConfigError};
pub use routes::build_router;
pub use state::AppState;

use axum::Router;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves.
///
/// After the signal, in-flight requests get `grace` to finish; the future
/// then returns even if connections are still open.
///
/// # Errors
///
/// Returns the I/O error that stopped the server.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    grace: Duration,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let signalled = Arc::new(Notify::new());
    let notify = Arc::clone(&signalled);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown.await;
        info!("Shutdown signal received, draining connections");
        notify.notify_one();
    });

    tokio::select! {
        result = server.into_future() => result,
        () = async {
            signalled.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_secs = grace.as_secs(), "Grace period expired, forcing shutdown");
            Ok(())
        }
    }
}

/// Resolve on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "Failed to listen for Ctrl+C, shutting down");
    }
}
