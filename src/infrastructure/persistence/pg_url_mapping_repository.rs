//! PostgreSQL implementation of the url mapping repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{MappingCounts, UrlMappingRepository};
use crate::error::AppError;

/// PostgreSQL repository for the `url_mapping` table.
///
/// All lookups order by `id` so callers can rely on "last row is newest".
pub struct PgUrlMappingRepository {
    pool: Arc<PgPool>,
}

impl PgUrlMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlMappingRepository for PgUrlMappingRepository {
    async fn find_by_short_id(&self, short_url_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_url_id, original_url, creation_date, expiry_date
            FROM url_mapping
            WHERE short_url_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(short_url_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, short_url_id, original_url, creation_date, expiry_date
            FROM url_mapping
            WHERE original_url = $1
            ORDER BY id ASC
            "#,
        )
        .bind(original_url)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<Vec<UrlMapping>, AppError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO url_mapping (short_url_id, original_url, creation_date, expiry_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, short_url_id, original_url, creation_date, expiry_date
            "#,
        )
        .bind(new_mapping.short_url_id)
        .bind(new_mapping.original_url)
        .bind(new_mapping.creation_date)
        .bind(new_mapping.expiry_date)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete_expired_before(&self, date: NaiveDate) -> Result<Vec<UrlMapping>, AppError> {
        let mut rows = sqlx::query_as::<_, UrlMapping>(
            r#"
            DELETE FROM url_mapping
            WHERE expiry_date < $1
            RETURNING id, short_url_id, original_url, creation_date, expiry_date
            "#,
        )
        .bind(date)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }

    async fn count_by_status(&self, today: NaiveDate) -> Result<MappingCounts, AppError> {
        let (live, expired): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE expiry_date >= $1),
                COUNT(*) FILTER (WHERE expiry_date < $1)
            FROM url_mapping
            "#,
        )
        .bind(today)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(MappingCounts { live, expired })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
