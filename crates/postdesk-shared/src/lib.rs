//! # Postdesk Shared
//!
//! Wire types shared by the server and any Rust client: the response
//! envelope and the request/response DTOs.

pub mod dto;
pub mod response;

pub use response::ApiResponse;
