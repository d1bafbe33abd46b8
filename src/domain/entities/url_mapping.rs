//! Url mapping entity, the only persisted record.

use chrono::{Days, NaiveDate};
use serde::Serialize;

/// A short id → original url mapping.
///
/// Dates carry no time of day. A row is live while `expiry_date >= today`
/// and is removed by the next sweep once `expiry_date < today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i32,
    pub short_url_id: Option<String>,
    pub original_url: Option<String>,
    pub creation_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl UrlMapping {
    /// Returns true once the calendar day `today` is past the expiry date.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    /// The original url, if present and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.original_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Input data for inserting a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub short_url_id: String,
    pub original_url: String,
    pub creation_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

/// Computes `creation + days`.
///
/// Returns `None` if the result falls outside the representable calendar.
pub fn expiry_date_for(creation: NaiveDate, days: u32) -> Option<NaiveDate> {
    creation.checked_add_days(Days::new(u64::from(days)))
}
