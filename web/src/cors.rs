//! Cross-origin policy.
//!
//! Any origin, method, and header is accepted and credentials are allowed.
//! Browsers reject a literal `*` alongside credentials, so the request's
//! own `Origin`, method, and headers are mirrored back instead.

use axum::http::HeaderName;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Build the CORS layer applied to every route.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        // Lets browser scripts read the correlation id
        .expose_headers([HeaderName::from_static("x-correlation-id")])
}
