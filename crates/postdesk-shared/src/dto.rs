//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use postdesk_core::DomainError;
use postdesk_core::domain::{Post, PostChanges, PostDraft, parse_due_date};

/// Request to create a post. Every field is required; presence is checked
/// by the server so that a missing field yields the standard envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[schema(example = "Promo A")]
    pub title: Option<String>,
    #[schema(example = "Acme")]
    pub brand: Option<String>,
    #[schema(example = "Instagram")]
    pub platform: Option<String>,
    #[schema(format = DateTime, example = "2024-06-01T00:00:00Z")]
    pub due_date: Option<String>,
    #[schema(example = 100)]
    pub payment: Option<f64>,
    #[schema(example = "pending")]
    pub status: Option<String>,
}

/// Request to update a post. Only the fields present are changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    #[schema(format = DateTime)]
    pub due_date: Option<String>,
    pub payment: Option<f64>,
    pub status: Option<String>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Auto-generated unique identifier.
    pub id: String,
    /// Title of the post.
    pub title: String,
    /// Brand name.
    pub brand: String,
    /// Platform where the post will be published.
    pub platform: String,
    /// Due date for the post.
    pub due_date: DateTime<Utc>,
    /// Payment amount.
    pub payment: f64,
    /// Current status of the post.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            brand: post.brand,
            platform: post.platform,
            due_date: post.due_date,
            payment: post.payment,
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<CreatePostRequest> for PostDraft {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            brand: req.brand,
            platform: req.platform,
            due_date: req.due_date,
            payment: req.payment,
            status: req.status,
        }
    }
}

impl TryFrom<UpdatePostRequest> for PostChanges {
    type Error = DomainError;

    fn try_from(req: UpdatePostRequest) -> Result<Self, Self::Error> {
        let due_date = req.due_date.as_deref().map(parse_due_date).transpose()?;

        Ok(Self {
            title: req.title,
            brand: req.brand,
            platform: req.platform,
            due_date,
            payment: req.payment,
            status: req.status,
        })
    }
}
