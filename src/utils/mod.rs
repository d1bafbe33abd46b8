//! Utility helpers.
//!
//! - [`short_id`] - short url token generation and random tags

pub mod short_id;
