//! Rendering of the response envelope.
//!
//! Every response body, success or failure, is written by [`respond`], so the
//! envelope shape and the status line cannot drift apart.

use actix_web::{HttpResponse, http::StatusCode};
use postdesk_shared::ApiResponse;
use serde::Serialize;

/// Write `body` with an HTTP status matching its `status_code`.
pub fn respond<T: Serialize>(body: ApiResponse<T>) -> HttpResponse {
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(body)
}

/// 200 with payload.
pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    respond(ApiResponse::ok(StatusCode::OK.as_u16(), message, data))
}

/// 201 with payload.
pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    respond(ApiResponse::ok(StatusCode::CREATED.as_u16(), message, data))
}

/// 200 without payload.
pub fn done(message: &str) -> HttpResponse {
    respond(ApiResponse::<()>::done(StatusCode::OK.as_u16(), message))
}
