//! Url mapping store implementations.
//!
//! - [`PgUrlMappingRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryUrlMappingRepository`] - process-local storage with the same ordering rules

pub mod memory_url_mapping_repository;
pub mod pg_url_mapping_repository;

pub use memory_url_mapping_repository::InMemoryUrlMappingRepository;
pub use pg_url_mapping_repository::PgUrlMappingRepository;
