//! In-memory implementation of the url mapping repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingCounts, UrlMappingRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Table {
    rows: Vec<UrlMapping>,
    next_id: i32,
}

/// Process-local url mapping store.
///
/// Rows are kept in insertion order with a serial id, matching the ordering
/// guarantees of the PostgreSQL repository. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryUrlMappingRepository {
    table: RwLock<Table>,
}

impl InMemoryUrlMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, live or not.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Snapshot of every stored row in id order.
    pub async fn rows(&self) -> Vec<UrlMapping> {
        self.table.read().await.rows.clone()
    }

    async fn select<F>(&self, predicate: F) -> Vec<UrlMapping>
    where
        F: Fn(&UrlMapping) -> bool,
    {
        self.table
            .read()
            .await
            .rows
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl UrlMappingRepository for InMemoryUrlMappingRepository {
    async fn find_by_short_id(&self, short_url_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self
            .select(|row| row.short_url_id.as_deref() == Some(short_url_id))
            .await)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Vec<UrlMapping>, AppError> {
        Ok(self
            .select(|row| row.original_url.as_deref() == Some(original_url))
            .await)
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<Vec<UrlMapping>, AppError> {
        let mut table = self.table.write().await;

        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| AppError::storage("url_mapping id sequence exhausted"))?;

        let row = UrlMapping {
            id: table.next_id,
            short_url_id: Some(new_mapping.short_url_id),
            original_url: Some(new_mapping.original_url),
            creation_date: new_mapping.creation_date,
            expiry_date: new_mapping.expiry_date,
        };
        table.rows.push(row.clone());

        Ok(vec![row])
    }

    async fn delete_expired_before(&self, date: NaiveDate) -> Result<Vec<UrlMapping>, AppError> {
        let mut table = self.table.write().await;

        let (deleted, kept): (Vec<UrlMapping>, Vec<UrlMapping>) = std::mem::take(&mut table.rows)
            .into_iter()
            .partition(|row| row.expiry_date < date);
        table.rows = kept;

        Ok(deleted)
    }

    async fn count_by_status(&self, today: NaiveDate) -> Result<MappingCounts, AppError> {
        let table = self.table.read().await;
        let expired = table.rows.iter().filter(|row| row.is_expired(today)).count();

        Ok(MappingCounts {
            live: (table.rows.len() - expired) as i64,
            expired: expired as i64,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
