//! Handlers for short id resolution.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original url.
///
/// # Endpoint
///
/// `GET /{short_url_id}`
///
/// Responds with 302 Found and the original url in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if no live mapping exists for the id.
/// Returns 500 on storage failures.
pub async fn redirect_handler(
    Path(short_url_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    debug!(%short_url_id, "Resolving short url");

    let original_url = state.url_encoder.decode(&short_url_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]).into_response())
}

/// Answers requests that name no short id.
///
/// Mounted on `GET /` and as the router fallback.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not Found")
}
