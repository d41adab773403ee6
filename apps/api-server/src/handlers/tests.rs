use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

use postdesk_core::domain::{Post, PostChanges};
use postdesk_core::error::RepoError;
use postdesk_core::ports::{BaseRepository, PostRepository};
use postdesk_infra::InMemoryPostRepository;

use super::configure_routes;
use crate::state::AppState;

macro_rules! init_app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_repository(Arc::new($repo))))
                .configure(configure_routes),
        )
        .await
    };
}

/// Repository whose every call fails as if the database were down.
struct UnreachableRepository;

fn unreachable() -> RepoError {
    RepoError::Connection("connection refused".to_string())
}

#[async_trait]
impl BaseRepository<Post, Uuid> for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(unreachable())
    }

    async fn insert(&self, _post: Post) -> Result<Post, RepoError> {
        Err(unreachable())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(unreachable())
    }
}

#[async_trait]
impl PostRepository for UnreachableRepository {
    async fn update(&self, _id: Uuid, _changes: PostChanges) -> Result<Post, RepoError> {
        Err(unreachable())
    }
}

async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn promo() -> Value {
    json!({
        "title": "Promo A",
        "brand": "Acme",
        "platform": "Instagram",
        "dueDate": "2024-06-01T00:00:00Z",
        "payment": 100,
        "status": "pending"
    })
}

fn assert_envelope(body: &Value, status: bool, status_code: u16, message: &str) {
    assert_eq!(body["status"], json!(status), "body: {}", body);
    assert_eq!(body["status_code"], json!(status_code), "body: {}", body);
    assert_eq!(body["message"], json!(message), "body: {}", body);
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    value
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .expect("RFC 3339 timestamp")
}

#[actix_web::test]
async fn test_create_get_delete_lifecycle() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(promo())
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_envelope(&body, true, 201, "Post created successfully.");
    assert_eq!(body["data"]["title"], json!("Promo A"));

    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let req = test::TestRequest::get()
        .uri(&format!("/api/post/{}", id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, 200, "Get post successfully");
    let data = &body["data"];
    assert_eq!(data["title"], json!("Promo A"));
    assert_eq!(data["brand"], json!("Acme"));
    assert_eq!(data["platform"], json!("Instagram"));
    assert_eq!(data["dueDate"], json!("2024-06-01T00:00:00Z"));
    assert_eq!(data["payment"], json!(100.0));
    assert_eq!(data["status"], json!("pending"));

    let req = test::TestRequest::delete()
        .uri(&format!("/api/post/{}", id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, 200, "Post deleted successfully.");

    let req = test::TestRequest::get()
        .uri(&format!("/api/post/{}", id))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, false, 404, "Post not found.");
    assert_eq!(body["data"], Value::Null);
}

#[actix_web::test]
async fn test_create_with_any_field_missing_is_rejected() {
    let app = init_app!(InMemoryPostRepository::new());

    for field in ["title", "brand", "platform", "dueDate", "payment", "status"] {
        let mut payload = promo();
        payload.as_object_mut().unwrap().remove(field);

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload)
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {}", field);
        assert_envelope(&body, false, 400, "All fields are required.");
        assert_eq!(body["data"], Value::Null);
    }

    let req = test::TestRequest::get().uri("/api/post").to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"], json!([]));
}

#[actix_web::test]
async fn test_create_with_empty_field_is_rejected() {
    let app = init_app!(InMemoryPostRepository::new());

    let mut payload = promo();
    payload["status"] = json!("");

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(payload)
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_missing_ids_are_not_found() {
    let app = init_app!(InMemoryPostRepository::new());
    let missing = Uuid::new_v4();

    for id in [missing.to_string(), "not-a-uuid".to_string()] {
        let uri = format!("/api/post/{}", id);

        let (status, body) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_envelope(&body, false, 404, "Post not found.");

        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "status": "done" }))
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_envelope(&body, false, 404, "Post not found.");

        let (status, body) = send(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_envelope(&body, false, 404, "Post not found.");
    }
}

#[actix_web::test]
async fn test_update_replaces_only_present_fields() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(promo())
        .to_request();
    let (_, created) = send(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    std::thread::sleep(std::time::Duration::from_millis(5));

    let req = test::TestRequest::put()
        .uri(&format!("/api/post/{}", id))
        .set_json(json!({ "status": "published", "payment": 150 }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, 200, "Post updated successfully.");

    let data = &body["data"];
    assert_eq!(data["status"], json!("published"));
    assert_eq!(data["payment"], json!(150.0));
    assert_eq!(data["title"], json!("Promo A"));
    assert_eq!(data["brand"], json!("Acme"));
    assert_eq!(data["dueDate"], json!("2024-06-01T00:00:00Z"));
    assert_eq!(data["createdAt"], created["data"]["createdAt"]);
    assert!(timestamp(&data["updatedAt"]) > timestamp(&created["data"]["updatedAt"]));
}

#[actix_web::test]
async fn test_update_with_bad_due_date_is_unhandled() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(promo())
        .to_request();
    let (_, created) = send(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/post/{}", id))
        .set_json(json!({ "dueDate": "next week" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_envelope(&body, false, 500, "Invalid dueDate: 'next week'");
}

#[actix_web::test]
async fn test_update_missing_id_wins_over_bad_body() {
    let app = init_app!(InMemoryPostRepository::new());
    let uri = format!("/api/post/{}", Uuid::new_v4());

    for payload in [json!({ "dueDate": "garbage" }), json!({ "payment": "abc" })] {
        let req = test::TestRequest::put()
            .uri(&uri)
            .set_json(payload.clone())
            .to_request();
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "payload {}", payload);
        assert_envelope(&body, false, 404, "Post not found.");
        assert_eq!(body["data"], Value::Null);
    }
}

#[actix_web::test]
async fn test_update_existing_with_wrong_field_type_is_bad_request() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(promo())
        .to_request();
    let (_, created) = send(&app, req).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/post/{}", id))
        .set_json(json!({ "payment": "abc" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(false));
    assert_eq!(body["status_code"], json!(400));
    assert_eq!(body["data"], Value::Null);

    // The rejected body left the post untouched.
    let req = test::TestRequest::get()
        .uri(&format!("/api/post/{}", id))
        .to_request();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["data"]["payment"], json!(100.0));
}

#[actix_web::test]
async fn test_list_contains_created_posts() {
    let app = init_app!(InMemoryPostRepository::new());

    let mut ids = Vec::new();
    for title in ["A", "B", "C"] {
        let mut payload = promo();
        payload["title"] = json!(title);
        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(payload)
            .to_request();
        let (_, body) = send(&app, req).await;
        ids.push(body["data"]["id"].clone());
    }

    // Both spellings of the collection path are served.
    for uri in ["/api/post", "/api/post/"] {
        let (status, body) = send(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_envelope(&body, true, 200, "Get posts successfully");

        let listed: Vec<Value> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].clone())
            .collect();
        assert!(listed.len() >= ids.len());
        for id in &ids {
            assert!(listed.contains(id));
        }
    }
}

#[actix_web::test]
async fn test_datastore_failure_is_internal_error() {
    let app = init_app!(UnreachableRepository);
    let message = "Database connection failed: connection refused";
    let item = format!("/api/post/{}", Uuid::new_v4());

    let requests = vec![
        test::TestRequest::get().uri("/api/post").to_request(),
        test::TestRequest::get().uri(&item).to_request(),
        test::TestRequest::post()
            .uri("/api/post")
            .set_json(promo())
            .to_request(),
        test::TestRequest::put()
            .uri(&item)
            .set_json(json!({ "title": "x" }))
            .to_request(),
        test::TestRequest::delete().uri(&item).to_request(),
    ];

    for req in requests {
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_envelope(&body, false, 500, message);
        assert_eq!(body["data"], Value::Null);
    }
}

#[actix_web::test]
async fn test_validation_happens_before_datastore() {
    // An unreachable store still yields 400 for incomplete input.
    let app = init_app!(UnreachableRepository);

    let req = test::TestRequest::post()
        .uri("/api/post")
        .set_json(json!({ "title": "Promo A" }))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, false, 400, "All fields are required.");
}

#[actix_web::test]
async fn test_malformed_json_gets_envelope() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::post()
        .uri("/api/post")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], json!(false));
    assert_eq!(body["status_code"], json!(400));
    assert_eq!(body["data"], Value::Null);
}

#[actix_web::test]
async fn test_openapi_document_is_served() {
    let app = init_app!(InMemoryPostRepository::new());

    let req = test::TestRequest::get()
        .uri(crate::docs::OPENAPI_PATH)
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], json!("Social Media Post To-Do API"));
    assert!(body["paths"].get("/api/post").is_some());
    assert!(body["paths"].get("/api/post/{id}").is_some());
    assert!(body["components"]["schemas"].get("PostResponse").is_some());
}
