//! Generated OpenAPI description and Swagger UI.

use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use postdesk_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::handlers::posts;

/// Path of the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

// The envelope types below exist only to describe response bodies in the
// generated document; handlers build bodies with `ApiResponse<T>`.

/// Envelope carrying a single post.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PostEnvelope {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Get post successfully")]
    message: String,
    data: Option<PostResponse>,
}

/// Envelope carrying a list of posts.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct PostListEnvelope {
    #[schema(example = true)]
    status: bool,
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Get posts successfully")]
    message: String,
    data: Option<Vec<PostResponse>>,
}

/// Envelope without a payload; `data` is always null.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct MessageEnvelope {
    status: bool,
    status_code: u16,
    #[schema(example = "Post not found.")]
    message: String,
    #[schema(value_type = Option<Object>)]
    data: Option<()>,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Media Post To-Do API",
        version = "1.0.0",
        description = "CRUD API for managing social media post tasks"
    ),
    paths(
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post
    ),
    components(schemas(
        PostResponse,
        CreatePostRequest,
        UpdatePostRequest,
        PostEnvelope,
        PostListEnvelope,
        MessageEnvelope
    )),
    tags((name = "Posts", description = "Social media post tasks"))
)]
pub struct ApiDoc;

/// Swagger UI under `/api-docs/`, serving the document at [`OPENAPI_PATH`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api-docs/{_:.*}").url(OPENAPI_PATH, ApiDoc::openapi())
}
