//! HTTP layer: translates requests into encoder calls and results into responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - Request handlers
//! - [`middleware`] - CORS and request tracing
//! - [`routes`] - Route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
