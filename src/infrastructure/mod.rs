//! Infrastructure layer: concrete implementations of the domain contracts.
//!
//! - [`persistence`] - PostgreSQL and in-memory url mapping stores

pub mod persistence;
