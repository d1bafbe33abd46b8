#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url_encoder::domain::entities::{NewUrlMapping, UrlMapping};
use url_encoder::domain::repositories::{MappingCounts, UrlMappingRepository};
use url_encoder::error::AppError;
use url_encoder::infrastructure::persistence::InMemoryUrlMappingRepository;
use url_encoder::state::AppState;
use url_encoder::utils::short_id::ShortUuidGenerator;

pub const HOLD_DAYS: u32 = 7;

/// In-memory store that counts every call made to it.
#[derive(Default)]
pub struct RecordingRepository {
    pub inner: InMemoryUrlMappingRepository,
    calls: AtomicUsize,
}

impl RecordingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UrlMappingRepository for RecordingRepository {
    async fn find_by_short_id(&self, short_url_id: &str) -> Result<Vec<UrlMapping>, AppError> {
        self.record();
        self.inner.find_by_short_id(short_url_id).await
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Vec<UrlMapping>, AppError> {
        self.record();
        self.inner.find_by_original_url(original_url).await
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<Vec<UrlMapping>, AppError> {
        self.record();
        self.inner.insert(new_mapping).await
    }

    async fn delete_expired_before(&self, date: NaiveDate) -> Result<Vec<UrlMapping>, AppError> {
        self.record();
        self.inner.delete_expired_before(date).await
    }

    async fn count_by_status(&self, today: NaiveDate) -> Result<MappingCounts, AppError> {
        self.record();
        self.inner.count_by_status(today).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.record();
        self.inner.ping().await
    }
}

/// Store whose every operation fails like a lost connection.
pub struct UnavailableRepository;

#[async_trait]
impl UrlMappingRepository for UnavailableRepository {
    async fn find_by_short_id(&self, _: &str) -> Result<Vec<UrlMapping>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_original_url(&self, _: &str) -> Result<Vec<UrlMapping>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn insert(&self, _: NewUrlMapping) -> Result<Vec<UrlMapping>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_expired_before(&self, _: NaiveDate) -> Result<Vec<UrlMapping>, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn count_by_status(&self, _: NaiveDate) -> Result<MappingCounts, AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn create_test_state() -> (AppState, Arc<RecordingRepository>) {
    create_test_state_with_duration(Some(HOLD_DAYS))
}

pub fn create_test_state_with_duration(
    hold_duration_days: Option<u32>,
) -> (AppState, Arc<RecordingRepository>) {
    let repo = Arc::new(RecordingRepository::default());
    let state = AppState::new(
        repo.clone(),
        Arc::new(ShortUuidGenerator::new()),
        hold_duration_days,
    );

    (state, repo)
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableRepository),
        Arc::new(ShortUuidGenerator::new()),
        Some(HOLD_DAYS),
    )
}

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub async fn create_test_mapping(
    repo: &RecordingRepository,
    short_url_id: &str,
    url: &str,
    expiry_date: NaiveDate,
) {
    repo.inner
        .insert(NewUrlMapping {
            short_url_id: short_url_id.to_string(),
            original_url: url.to_string(),
            creation_date: expiry_date - chrono::Days::new(u64::from(HOLD_DAYS)),
            expiry_date,
        })
        .await
        .unwrap();
}
