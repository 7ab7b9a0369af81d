//! Prometheus exposition through `/metrics`.
//!
//! Installs the global recorder, so this file holds a single test.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use todo_core::TodoStore;
use todo_server::{build_router, metrics, AppState};
use tower::ServiceExt;

fn json_request(method: Method, uri: String, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Value of an unlabelled sample line such as `todos_items 3`.
fn sample(body: &str, name: &str) -> f64 {
    body.lines()
        .find_map(|line| line.strip_prefix(name)?.strip_prefix(' '))
        .unwrap_or_else(|| panic!("no `{name}` sample in:\n{body}"))
        .trim()
        .parse()
        .unwrap()
}

async fn concurrent_traffic(app: &Router) {
    let creates: Vec<_> = (0..32)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = json_request(
                    Method::POST,
                    "/api/Todos".to_string(),
                    json!({ "title": format!("Burst {i}") }),
                );
                app.oneshot(request).await.unwrap().status()
            })
        })
        .collect();
    for handle in creates {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let deletes: Vec<_> = (1..=32_u64)
        .filter(|id| id % 2 == 0)
        .map(|id| {
            let app = app.clone();
            tokio::spawn(async move {
                let request = Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/Todos/{id}"))
                    .body(Body::empty())
                    .unwrap();
                app.oneshot(request).await.unwrap().status()
            })
        })
        .collect();
    for handle in deletes {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }
}

#[tokio::test]
#[allow(clippy::float_cmp, clippy::cast_precision_loss)]
async fn test_metrics_reflect_api_traffic() {
    let handle = metrics::install_recorder().expect("recorder should install once");
    let store = Arc::new(TodoStore::new());
    let app = build_router(AppState::new(Arc::clone(&store), Some(handle)));

    concurrent_traffic(&app).await;

    let server = TestServer::new(app).unwrap();
    server
        .put("/api/Todos/1")
        .json(&json!({ "title": "Burst edited", "isComplete": true }))
        .await;
    server.delete("/api/Todos/2").await;
    server.delete("/api/Todos/-1").await;

    let response = server.get("/metrics").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.text();
    assert_eq!(sample(&body, "todos_created_total"), 32.0);
    assert_eq!(sample(&body, "todos_updated_total"), 1.0);
    assert_eq!(sample(&body, "todos_deleted_total"), 16.0);
    assert!(
        body.contains(r#"todos_not_found_total{operation="delete"} 2"#),
        "{body}"
    );
    assert_eq!(sample(&body, "todos_items"), store.len() as f64);
    assert_eq!(store.len(), 16);

    assert!(metrics::install_recorder().is_err());
}
