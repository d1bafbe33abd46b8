//! Cross-origin policies.
//!
//! Both public routes accept requests from any origin.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Policy for `GET /{short_url_id}`.
pub fn redirect_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
}

/// Policy for `POST /shorturl`, including its preflight requests.
pub fn shorten_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
