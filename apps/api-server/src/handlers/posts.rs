//! Post CRUD handlers.
//!
//! Each handler performs exactly one repository call and renders the outcome
//! through the shared envelope.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use postdesk_core::DomainError;
use postdesk_core::domain::{Post, PostChanges, PostDraft};
use postdesk_core::ports::{BaseRepository, PostRepository};
use postdesk_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::docs::{MessageEnvelope, PostEnvelope, PostListEnvelope};
use crate::envelope;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Post";

pub const GET_POSTS_MESSAGE: &str = "Get posts successfully";
pub const GET_POST_MESSAGE: &str = "Get post successfully";
pub const CREATED_MESSAGE: &str = "Post created successfully.";
pub const UPDATED_MESSAGE: &str = "Post updated successfully.";
pub const DELETED_MESSAGE: &str = "Post deleted successfully.";

fn not_found(id: &str) -> AppError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Ids are opaque to clients; one that is not a UUID cannot name a post.
fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| not_found(id))
}

/// GET /api/post
#[utoipa::path(
    get,
    path = "/api/post",
    tag = "Posts",
    responses(
        (status = 200, description = "Successfully retrieved posts", body = PostListEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listed posts");

    let data: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(envelope::ok(GET_POSTS_MESSAGE, data))
}

/// GET /api/post/{id}
#[utoipa::path(
    get,
    path = "/api/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Successfully retrieved post", body = PostEnvelope),
        (status = 404, description = "Post not found", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post_id = parse_id(&id)?;

    let post = state
        .posts
        .find_by_id(post_id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, &id, e))?
        .ok_or_else(|| not_found(&id))?;

    Ok(envelope::ok(GET_POST_MESSAGE, PostResponse::from(post)))
}

/// POST /api/post
#[utoipa::path(
    post,
    path = "/api/post",
    tag = "Posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created successfully", body = PostEnvelope),
        (status = 400, description = "Bad request - missing required fields", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    // Presence is checked before any datastore access.
    let fields = PostDraft::from(body.into_inner()).validate()?;

    let post = state.posts.insert(Post::new(fields)).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(envelope::created(CREATED_MESSAGE, PostResponse::from(post)))
}

/// PUT /api/post/{id}
///
/// Only the fields present in the body are replaced; there is no presence
/// check here, unlike creation. The body is read only once the post is known
/// to exist, so a missing id is reported as 404 whatever the body holds.
#[utoipa::path(
    put,
    path = "/api/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated successfully", body = PostEnvelope),
        (status = 404, description = "Post not found", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post_id = parse_id(&id)?;

    state
        .posts
        .find_by_id(post_id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, &id, e))?
        .ok_or_else(|| not_found(&id))?;

    let req: UpdatePostRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Json deserialize error: {}", e)))?;
    let changes = PostChanges::try_from(req)?;

    // A delete racing this request still surfaces as NotFound here.
    let post = state
        .posts
        .update(post_id, changes)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, &id, e))?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(envelope::ok(UPDATED_MESSAGE, PostResponse::from(post)))
}

/// DELETE /api/post/{id}
#[utoipa::path(
    delete,
    path = "/api/post/{id}",
    tag = "Posts",
    params(("id" = String, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted successfully", body = MessageEnvelope),
        (status = 404, description = "Post not found", body = MessageEnvelope),
        (status = 500, description = "Internal server error", body = MessageEnvelope)
    )
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post_id = parse_id(&id)?;

    state
        .posts
        .delete(post_id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, &id, e))?;
    tracing::info!(post_id = %post_id, "Post deleted");

    Ok(envelope::done(DELETED_MESSAGE))
}
