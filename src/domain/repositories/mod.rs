//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; a mock is
//! generated with `mockall` for unit tests.

pub mod url_mapping_repository;

pub use url_mapping_repository::{MappingCounts, UrlMappingRepository};

#[cfg(test)]
pub use url_mapping_repository::MockUrlMappingRepository;
