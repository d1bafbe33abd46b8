//! Handler for the url shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;
use validator::Validate;

use crate::api::dto::shorten::{ShortUrlRequest, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_id::new_tag;

/// Creates (or reuses) the short id for a url.
///
/// # Endpoint
///
/// `POST /shorturl`
///
/// # Request Body
///
/// ```json
/// { "url_string": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "5b0c7a0e-2f0d-4c55-9a53-3c1bd0a4f1e2", "shortUrl": "mhvXdrZT4jP5T8vBxuvm75" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or `url_string` is
/// missing or empty; the store is not touched in that case.
/// Returns 500 on storage or insertion failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortUrlRequest>, JsonRejection>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    payload.validate()?;

    info!(original_url = %payload.url_string, "Short url requested");

    let short_url = state.url_encoder.encode(&payload.url_string).await?;
    if short_url.is_empty() {
        return Err(AppError::internal("Failed to generate short url"));
    }

    Ok(Json(ShortUrlResponse {
        id: new_tag(),
        short_url,
    }))
}
