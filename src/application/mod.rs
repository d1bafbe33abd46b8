//! Application layer services.
//!
//! - [`services::url_encoder_service::UrlEncoderService`] - encode/decode of short urls,
//!   including the expiry sweep and deduplication

pub mod services;
