//! Error handling - maps failures onto the response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use postdesk_core::{DomainError, RepoError};
use postdesk_shared::ApiResponse;
use thiserror::Error;

use crate::envelope::respond;

/// Application-level error type rendered as a failed envelope.
///
/// The `Display` text is the envelope's `message`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Map a repository failure for an operation targeting one record.
    ///
    /// The not-found signal is checked first; anything else is unhandled.
    pub fn from_repo(entity_type: &'static str, id: &str, err: RepoError) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound {
                entity_type,
                id: id.to_string(),
            }
            .into(),
            other => other.into(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            AppError::BadRequest(detail) => tracing::warn!("Bad request: {}", detail),
            AppError::NotFound(detail) => tracing::debug!("Not found: {}", detail),
        }

        respond(ApiResponse::<()>::fail(
            self.status_code().as_u16(),
            self.to_string(),
        ))
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id = %id, "Entity not found");
                AppError::NotFound(format!("{} not found.", entity_type))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Malformed(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found.".to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
