//! Custom Axum extractors.
//!
//! Drop-in replacements for `axum::Json` and `axum::extract::Path` whose
//! rejections render as [`AppError`] (`{"detail": ...}`) instead of axum's
//! plain-text bodies, plus [`TodoPath`] for the `:id` segment of todo routes.
//!
//! # Examples
//!
//! ```ignore
//! use todo_web::extractors::{ApiJson, TodoPath};
//!
//! async fn handler(
//!     TodoPath(id): TodoPath,
//!     ApiJson(request): ApiJson<UpdateTodoRequest>,
//! ) -> Result<(), AppError> {
//!     // non-integer ids and malformed bodies never reach this point
//!     Ok(())
//! }
//! ```

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, HeaderValue},
    Json,
};
use serde::de::DeserializeOwned;
use todo_core::TodoId;

/// JSON request body.
///
/// A request without `Content-Type` is parsed as JSON. Malformed or
/// mistyped bodies become 422, a non-JSON content type becomes 415.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !req.headers().contains_key(header::CONTENT_TYPE) {
            req.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters.
///
/// Parameters that fail to deserialize become 422.
#[derive(Debug, Clone, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Todo id from the `:id` path segment.
///
/// Any integer is accepted. Integers no todo can carry (negative, or
/// beyond `u64`) resolve to `None`, which handlers report as not found.
/// Anything else is rejected with 422.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoPath(pub Option<TodoId>);

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ApiPath(raw) = ApiPath::<String>::from_request_parts(parts, state).await?;
        parse_todo_id(&raw).map(Self)
    }
}

fn parse_todo_id(raw: &str) -> Result<Option<TodoId>, AppError> {
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::validation(format!(
            "Invalid URL: Cannot parse `{raw}` as an integer"
        )));
    }

    if negative {
        return Ok(None);
    }
    Ok(digits.parse::<u64>().ok().map(TodoId::new))
}
