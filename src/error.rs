//! Application error type shared by the engine, the store and the HTTP layer.
//!
//! Every error carries a freshly generated tag (see [`new_tag`]) so a
//! response can be matched against the log line that reported it.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::short_id::new_tag;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub id: String,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Required configuration (connection string, holding duration) is absent or unusable.
    #[error("{message}")]
    Configuration { id: String, message: String },

    #[error("{message}")]
    Validation { id: String, message: String },

    /// No live mapping for the requested short id, or the mapping has no target.
    #[error("{message}")]
    NotFound { id: String, message: String },

    /// Any failure reported by the persistence layer.
    #[error("{message}")]
    Storage {
        id: String,
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },

    /// The insert statement succeeded but persisted nothing.
    #[error("{message}")]
    InsertionFailed { id: String, message: String },

    #[error("{message}")]
    Internal { id: String, message: String },
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            id: new_tag(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            id: new_tag(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            id: new_tag(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            id: new_tag(),
            message: message.into(),
            source: None,
        }
    }

    pub fn insertion_failed() -> Self {
        Self::InsertionFailed {
            id: new_tag(),
            message: "Insertion failed at database level".to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            id: new_tag(),
            message: message.into(),
        }
    }

    /// The tag identifying this error instance.
    pub fn id(&self) -> &str {
        match self {
            AppError::Configuration { id, .. }
            | AppError::Validation { id, .. }
            | AppError::NotFound { id, .. }
            | AppError::Storage { id, .. }
            | AppError::InsertionFailed { id, .. }
            | AppError::Internal { id, .. } => id,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration { .. } => "configuration_error",
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Storage { .. } => "storage_error",
            AppError::InsertionFailed { .. } => "insertion_failed",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Configuration { .. } | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Storage { .. }
            | AppError::InsertionFailed { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            id: self.id().to_string(),
            code: self.code(),
            message: self.to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Storage {
            id: new_tag(),
            message: format!("Database error: {e}"),
            source: Some(e),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        AppError::bad_request(format!("Invalid request: {}", fields.join(", ")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
