//! HTTP handlers and route configuration.

pub mod posts;

#[cfg(test)]
mod tests;

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};

use crate::docs;
use crate::middleware::error::AppError;

/// Malformed JSON bodies get the standard envelope instead of a bare 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api/post")
                .service(
                    web::resource(["", "/"])
                        .route(web::get().to(posts::list_posts))
                        .route(web::post().to(posts::create_post)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::put().to(posts::update_post))
                        .route(web::delete().to(posts::delete_post)),
                ),
        )
        .service(docs::swagger_ui());
}
