//! Router assembly.

use axum::{middleware, routing::get, Router};
use todo_web::{cors_layer, handlers::health, track_correlation_id};
use tower_http::trace::TraceLayer;

use crate::api::todo_router;
use crate::metrics::metrics_handler;
use crate::state::AppState;

/// Build the full application router.
///
/// Layers run outermost first: CORS, then `TraceLayer`, then the
/// correlation id middleware, so preflight requests never reach a handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/alive", get(health::liveness_check))
        .route("/metrics", get(metrics_handler))
        .nest("/api", todo_router())
        .with_state(state)
        .layer(middleware::from_fn(track_correlation_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use std::sync::Arc;
    use todo_core::TodoStore;
    use todo_web::CORRELATION_ID_HEADER;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(Arc::new(TodoStore::new()), None))
    }

    #[tokio::test]
    async fn test_preflight_is_answered_for_api_routes() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/Todos/1")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "PUT");
    }

    #[tokio::test]
    async fn test_api_responses_carry_correlation_id() {
        let request = Request::builder()
            .uri("/api/Todos")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
    }

    #[tokio::test]
    async fn test_metrics_route_is_404_without_recorder() {
        let request = Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder()
            .uri("/api/Unknown")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
