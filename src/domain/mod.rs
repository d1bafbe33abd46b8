//! Domain layer: the url mapping entity and the storage contract.
//!
//! Nothing in here knows about HTTP or PostgreSQL. The engine in
//! [`crate::application::services`] depends only on these types, and
//! [`crate::infrastructure::persistence`] provides the implementations.

pub mod entities;
pub mod repositories;
