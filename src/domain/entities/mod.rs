//! Core domain entities.
//!
//! - [`UrlMapping`] - a persisted short id → original url row
//! - [`NewUrlMapping`] - input for inserting a row

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping, expiry_date_for};
