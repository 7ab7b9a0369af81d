//! Axum integration for the todo service.
//!
//! This crate is the HTTP shell around `todo-core`: it owns nothing
//! stateful and contains no business logic.
//!
//! # Contents
//!
//! - [`AppError`]: maps store errors and extractor rejections to
//!   `{"detail": ...}` JSON responses
//! - [`ApiJson`] / [`ApiPath`] / [`TodoPath`]: extractors whose rejections
//!   use `AppError`
//! - [`track_correlation_id`]: per-request correlation id and tracing span
//! - [`cors_layer`]: allow-everything CORS policy with credentials
//! - [`handlers::health`]: liveness and readiness probes
//!
//! # Request Flow
//!
//! 1. **CORS** layer answers preflights and decorates responses
//! 2. **Correlation id** middleware opens the request span
//! 3. **Extract** path and JSON body (rejections become `AppError`)
//! 4. **Call** one `TodoStore` operation
//! 5. **Map** the result to a response
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use todo_web::{cors_layer, track_correlation_id};
//!
//! let app = Router::new()
//!     .route("/api/Todos", get(list_todos))
//!     .layer(middleware::from_fn(track_correlation_id))
//!     .layer(cors_layer());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cors;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;

// Re-export key types for convenience
pub use cors::cors_layer;
pub use error::{AppError, TODO_NOT_FOUND};
pub use extractors::{ApiJson, ApiPath, TodoPath};
pub use middleware::{track_correlation_id, CorrelationId, CORRELATION_ID_HEADER};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
