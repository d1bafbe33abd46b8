//! Repository trait for url mapping storage.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;

/// Row counts split by expiry state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappingCounts {
    pub live: i64,
    pub expired: i64,
}

/// Storage contract consumed by the url encoder engine.
///
/// Lookups may return several rows for the same key. Implementations must
/// return them ordered by primary key ascending, so the last element is
/// always the most recently inserted row.
///
/// Every operation fails with [`AppError::Storage`] on persistence errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUrlMappingRepository`] - process-local
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Returns every row whose `short_url_id` equals `short_url_id`.
    async fn find_by_short_id(&self, short_url_id: &str) -> Result<Vec<UrlMapping>, AppError>;

    /// Returns every row whose `original_url` equals `original_url`.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Vec<UrlMapping>, AppError>;

    /// Inserts a mapping and returns the rows actually persisted.
    ///
    /// An empty result means the store accepted the statement but wrote nothing.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<Vec<UrlMapping>, AppError>;

    /// Deletes every row with `expiry_date < date` and returns the deleted rows.
    async fn delete_expired_before(&self, date: NaiveDate) -> Result<Vec<UrlMapping>, AppError>;

    /// Counts rows that are live or expired relative to `today`.
    async fn count_by_status(&self, today: NaiveDate) -> Result<MappingCounts, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
