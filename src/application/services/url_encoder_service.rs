//! Url encoding and decoding service.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, error, info};

use crate::domain::entities::{NewUrlMapping, UrlMapping, expiry_date_for};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::short_id::ShortIdGenerator;

/// Maps original urls to short ids and back.
///
/// The service holds no mutable state: the store handle and the holding
/// duration are fixed at construction. Concurrent first-time encodes of the
/// same url may both insert; readers resolve duplicates by taking the last
/// (highest id) row.
pub struct UrlEncoderService {
    repository: Arc<dyn UrlMappingRepository>,
    generator: Arc<dyn ShortIdGenerator>,
    holding_duration_days: Option<u32>,
}

impl UrlEncoderService {
    /// Creates a new encoder.
    ///
    /// `holding_duration_days` of `None` means the duration was not
    /// configured; encoding a url that needs a new row then fails with
    /// [`AppError::Configuration`].
    pub fn new(
        repository: Arc<dyn UrlMappingRepository>,
        generator: Arc<dyn ShortIdGenerator>,
        holding_duration_days: Option<u32>,
    ) -> Self {
        Self {
            repository,
            generator,
            holding_duration_days,
        }
    }

    pub fn holding_duration_days(&self) -> Option<u32> {
        self.holding_duration_days
    }

    /// Resolves a short id to its original url.
    ///
    /// Never mutates the store: expired rows that have not been swept yet
    /// still resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no row matches or the matching row
    /// has no url, [`AppError::Storage`] on database errors.
    pub async fn decode(&self, short_url_id: &str) -> Result<String, AppError> {
        let rows = self
            .repository
            .find_by_short_id(short_url_id)
            .await
            .inspect_err(|e| error!(error_id = e.id(), "Short url lookup failed: {}", e))?;

        rows.last()
            .and_then(UrlMapping::target)
            .map(str::to_string)
            .ok_or_else(|| AppError::not_found("Invalid Url"))
    }

    /// Returns the short id for `original_url`, creating a mapping if none is live.
    ///
    /// "Today" is the current UTC calendar date.
    pub async fn encode(&self, original_url: &str) -> Result<String, AppError> {
        self.encode_on(original_url, Utc::now().date_naive()).await
    }

    /// [`encode`](Self::encode) with an explicit current date.
    ///
    /// # Flow
    ///
    /// 1. Sweep rows with `expiry_date < today` (a failure aborts the call)
    /// 2. Reuse the short id of the last row already mapping `original_url`
    /// 3. Otherwise generate a token and insert a row expiring
    ///    `holding_duration_days` after `today`
    ///
    /// # Errors
    ///
    /// - [`AppError::Storage`] if any store call fails
    /// - [`AppError::Configuration`] if a new row is needed but no holding
    ///   duration is configured
    /// - [`AppError::InsertionFailed`] if the insert wrote no rows
    pub async fn encode_on(&self, original_url: &str, today: NaiveDate) -> Result<String, AppError> {
        self.sweep_expired(today).await?;

        let existing = self
            .repository
            .find_by_original_url(original_url)
            .await
            .inspect_err(|e| error!(error_id = e.id(), "Original url lookup failed: {}", e))?;

        if let Some(row) = existing.last() {
            debug!(short_url_id = ?row.short_url_id, "Reusing live mapping");
            return Ok(row.short_url_id.clone().unwrap_or_default());
        }

        let new_mapping = NewUrlMapping {
            short_url_id: self.generator.generate(),
            original_url: original_url.to_string(),
            creation_date: today,
            expiry_date: self.expiry_date(today)?,
        };

        let inserted = self
            .repository
            .insert(new_mapping)
            .await
            .inspect_err(|e| error!(error_id = e.id(), "Url mapping insert failed: {}", e))?;

        let Some(row) = inserted.last() else {
            let err = AppError::insertion_failed();
            error!(error_id = err.id(), "{}", err);
            return Err(err);
        };

        Ok(row.short_url_id.clone().unwrap_or_default())
    }

    /// Deletes every mapping that expired before `today`.
    ///
    /// Returns the number of deleted rows.
    pub async fn sweep_expired(&self, today: NaiveDate) -> Result<usize, AppError> {
        let deleted = self
            .repository
            .delete_expired_before(today)
            .await
            .inspect_err(|e| error!(error_id = e.id(), "Expiry sweep failed: {}", e))?;

        if !deleted.is_empty() {
            info!(count = deleted.len(), "Expired entries deleted");
        }

        Ok(deleted.len())
    }

    fn expiry_date(&self, creation: NaiveDate) -> Result<NaiveDate, AppError> {
        let days = self.holding_duration_days.ok_or_else(|| {
            AppError::configuration("Url holding duration is missing from the configuration")
        })?;

        expiry_date_for(creation, days).ok_or_else(|| {
            AppError::configuration(format!(
                "Url holding duration of {days} days overflows the calendar"
            ))
        })
    }
}
