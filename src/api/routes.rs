//! API route configuration.

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{health_handler, not_found_handler, redirect_handler, shorten_handler};
use crate::api::middleware::cors;
use crate::state::AppState;

/// All public routes. No authentication.
///
/// # Endpoints
///
/// - `GET  /`                - 404, no short id given
/// - `GET  /{short_url_id}`  - Redirect to the original url
/// - `POST /shorturl`        - Shorten a url
/// - `GET  /health`          - Store connectivity check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(not_found_handler))
        .route(
            "/{short_url_id}",
            get(redirect_handler).layer(cors::redirect_layer()),
        )
        .route(
            "/shorturl",
            post(shorten_handler).layer(cors::shorten_layer()),
        )
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
}
