//! Error types and their HTTP mapping.
//!
//! All errors are rendered as `text/plain` bodies:
//!
//! | Variant                  | Status |
//! |--------------------------|--------|
//! | [`AppError::InvalidUrl`] | 400    |
//! | [`AppError::NotFound`]   | 404    |
//! | [`AppError::Storage`]    | 500    |
//! | [`AppError::BadTarget`]  | 500    |

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::utils::url_normalizer::UrlNormalizationError;

/// Failures of the persisted link table.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access link file: {0}")]
    Io(#[from] std::io::Error),

    #[error("link file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("link store lock poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("short code '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A stored URL that cannot be sent in a `Location` header.
    #[error("stored URL for '{0}' is not a valid redirect target")]
    BadTarget(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) | AppError::BadTarget(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UrlNormalizationError> for AppError {
    fn from(e: UrlNormalizationError) -> Self {
        AppError::InvalidUrl(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::InvalidUrl(message) => format!("Error: {message}"),
            AppError::NotFound(_) => "not found".to_string(),
            AppError::Storage(e) => {
                tracing::error!("Storage failure: {}", e);
                "internal error".to_string()
            }
            AppError::BadTarget(_) => {
                tracing::error!("{}", self);
                "internal error".to_string()
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
