//! HTTP handlers for the todo API.
//!
//! Each handler is a thin translation between JSON and a single
//! [`TodoStore`] call. A missing id surfaces as `StoreError::NotFound` and
//! converts to a 404 `{"detail": "Todo not found"}` through `?`; so does
//! an integer path id that no todo can carry, such as `-1`.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use todo_core::{StoreError, TodoId, TodoItem, TodoStore};
use todo_web::{ApiJson, AppError, TodoPath, WebResult, TODO_NOT_FOUND};

use crate::metrics::TodoMetrics;

/// Request to create a todo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTodoRequest {
    /// Title of the new todo.
    pub title: String,
}

/// Request to replace a todo's title and completion flag.
///
/// An `id` field in the body is accepted and ignored; the path id wins.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    /// New title.
    pub title: String,

    /// New completion flag.
    pub is_complete: bool,
}

/// List every todo in insertion order.
///
/// # Endpoint
///
/// ```text
/// GET /api/Todos
/// ```
///
/// # Response
///
/// ```json
/// [{ "id": 1, "title": "Buy milk", "isComplete": false }]
/// ```
#[allow(clippy::unused_async)]
pub async fn list_todos(State(store): State<Arc<TodoStore>>) -> Json<Vec<TodoItem>> {
    Json(store.list_all())
}

/// Fetch a single todo.
///
/// ```text
/// GET /api/Todos/:id
/// ```
///
/// # Errors
///
/// 404 if no todo has this id.
#[allow(clippy::unused_async)]
pub async fn get_todo(
    State(store): State<Arc<TodoStore>>,
    TodoPath(id): TodoPath,
) -> WebResult<Json<TodoItem>> {
    let id = existing_id(id, "get")?;
    store.get_by_id(id).map(Json).ok_or_else(|| {
        TodoMetrics::record_not_found("get");
        StoreError::NotFound { id }.into()
    })
}

/// Create a todo and return its id as a bare JSON integer.
///
/// # Endpoint
///
/// ```text
/// POST /api/Todos
/// Content-Type: application/json
///
/// { "title": "Buy milk" }
/// ```
///
/// # Response
///
/// ```json
/// 1
/// ```
#[allow(clippy::unused_async)]
pub async fn create_todo(
    State(store): State<Arc<TodoStore>>,
    ApiJson(request): ApiJson<CreateTodoRequest>,
) -> Json<TodoId> {
    let id = store.create(request.title);
    TodoMetrics::record_created();
    Json(id)
}

/// Replace the title and completion flag of a todo.
///
/// ```text
/// PUT /api/Todos/:id
/// Content-Type: application/json
///
/// { "title": "Buy oat milk", "isComplete": true }
/// ```
///
/// # Errors
///
/// 404 if no todo has this id.
#[allow(clippy::unused_async)]
pub async fn update_todo(
    State(store): State<Arc<TodoStore>>,
    TodoPath(id): TodoPath,
    ApiJson(request): ApiJson<UpdateTodoRequest>,
) -> WebResult<StatusCode> {
    let id = existing_id(id, "update")?;
    store
        .update(id, request.title, request.is_complete)
        .inspect_err(|_| TodoMetrics::record_not_found("update"))?;
    TodoMetrics::record_updated();
    Ok(StatusCode::OK)
}

/// Delete a todo. Its id is never handed out again.
///
/// ```text
/// DELETE /api/Todos/:id
/// ```
///
/// # Errors
///
/// 404 if no todo has this id.
#[allow(clippy::unused_async)]
pub async fn delete_todo(
    State(store): State<Arc<TodoStore>>,
    TodoPath(id): TodoPath,
) -> Result<StatusCode, AppError> {
    let id = existing_id(id, "delete")?;
    store
        .delete(id)
        .inspect_err(|_| TodoMetrics::record_not_found("delete"))?;
    TodoMetrics::record_deleted();
    Ok(StatusCode::OK)
}

/// Unwrap a path id, answering 404 for ids no todo can have.
fn existing_id(id: Option<TodoId>, operation: &'static str) -> WebResult<TodoId> {
    id.ok_or_else(|| {
        TodoMetrics::record_not_found(operation);
        AppError::not_found(TODO_NOT_FOUND)
    })
}
