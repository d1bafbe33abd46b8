//! Business logic services for the application layer.

pub mod url_encoder_service;

pub use url_encoder_service::UrlEncoderService;
