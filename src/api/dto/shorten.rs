//! DTOs for the url shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a url.
///
/// A missing `url_string` deserializes to an empty string and fails validation.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortUrlRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "url_string must not be empty"))]
    pub url_string: String,
}

/// Successful shortening result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    /// Random tag identifying this response.
    pub id: String,
    pub short_url: String,
}
