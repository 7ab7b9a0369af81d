//! Todo REST API.

pub mod todos;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Todo routes, mounted under `/api` by [`crate::routes::build_router`].
///
/// # Routes
///
/// - `GET /Todos` - List todos
/// - `POST /Todos` - Create a todo
/// - `GET /Todos/:id` - Get a todo
/// - `PUT /Todos/:id` - Update a todo
/// - `DELETE /Todos/:id` - Delete a todo
pub fn todo_router() -> Router<AppState> {
    Router::new()
        .route("/Todos", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/Todos/:id",
            get(todos::get_todo)
                .put(todos::update_todo)
                .delete(todos::delete_todo),
        )
}
