//! The uniform response envelope returned by every endpoint.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every API response, successful or not.
///
/// `status_code` always mirrors the HTTP status line. `data` is `null` for
/// failures and for operations with nothing to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            status_code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Successful response carrying no payload.
    pub fn done(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: true,
            status_code,
            message: message.into(),
            data: None,
        }
    }

    pub fn fail(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: false,
            status_code,
            message: message.into(),
            data: None,
        }
    }
}
