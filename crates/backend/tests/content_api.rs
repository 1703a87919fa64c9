// Content API: public reads with defaults, contact inbox, gated writes,
// media uploads.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use portfolio_backend::auth::jwt;
use portfolio_backend::store::ContentStore;
use portfolio_types::{ContactSubmission, Profile, SiteContent, UploadResponse};

fn session_cookie() -> String {
    let config = common::test_auth_config();
    format!("session={}", jwt::create_token(&config).unwrap())
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn empty_store_serves_default_content() {
    let app = common::test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/content")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content: SiteContent = body_json(response).await;
    assert_eq!(content, SiteContent::default());
}

#[tokio::test]
async fn contact_form_round_trips_to_the_inbox() {
    let app = common::test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Ada",
                        "email": "ada@example.com",
                        "message": "I would love to work with you.",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let inbox = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/messages")
                .header(header::COOKIE, session_cookie())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(inbox.status(), StatusCode::OK);

    let messages: Vec<ContactSubmission> = body_json(inbox).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Ada");
    assert_eq!(messages[0].email, "ada@example.com");
}

#[tokio::test]
async fn contact_form_rejects_invalid_input() {
    let app = common::test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Ada",
                        "email": "not-an-email",
                        "message": "too short",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_update_requires_session() {
    let app = common::test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "name": "K", "title": "Dev", "bio": "Hi" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn profile_update_preserves_media_urls() {
    let (app, state) = common::test_app_with_state();

    // Seed a profile that already has an uploaded picture.
    state
        .store
        .set_document(
            "content",
            "profile",
            json!({
                "name": "Old Name",
                "title": "Old Title",
                "bio": "Old bio",
                "image_url": "https://cdn.example.com/existing.jpg",
            }),
        )
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, session_cookie())
                .body(Body::from(
                    json!({
                        "name": "Karan Chavda",
                        "title": "Creative Web Developer",
                        "bio": "Building things for the web.",
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved: Profile = body_json(response).await;
    assert_eq!(saved.name, "Karan Chavda");
    assert_eq!(
        saved.image_url.as_deref(),
        Some("https://cdn.example.com/existing.jpg"),
        "text-only saves must not drop uploaded media"
    );
}

#[tokio::test]
async fn blank_profile_fields_are_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/profile")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, session_cookie())
                .body(Body::from(
                    json!({ "name": "  ", "title": "Dev", "bio": "Hi" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn skills_update_is_visible_on_the_public_page() {
    let app = common::test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/skills")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, session_cookie())
                .body(Body::from(
                    json!({
                        "skills_data": [{
                            "category": "Frontend",
                            "skills": [{ "name": "CSS" }, { "name": "React" }],
                        }]
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = app
        .oneshot(
            Request::builder()
                .uri("/api/content")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let content: SiteContent = body_json(page).await;
    assert_eq!(content.skills.skills_data.len(), 1);
    assert_eq!(content.skills.skills_data[0].skills.len(), 2);
}

#[tokio::test]
async fn category_without_skills_is_rejected() {
    let app = common::test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/admin/skills")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, session_cookie())
                .body(Body::from(
                    json!({ "skills_data": [{ "category": "Empty", "skills": [] }] }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

fn multipart_body(boundary: &str, content_type: &str, payload: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"upload.bin\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[tokio::test]
async fn profile_image_upload_updates_the_profile() {
    let app = common::test_app();
    let boundary = "test-boundary";

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/upload/image?target=profile")
                .header(header::COOKIE, session_cookie())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(
                    boundary,
                    "image/png",
                    b"not-really-a-png",
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let upload: UploadResponse = body_json(response).await;
    assert!(upload.url.starts_with("https://cdn.example.com/"));
    assert!(upload.url.ends_with(".png"));

    let page = app
        .oneshot(
            Request::builder()
                .uri("/api/content")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let content: SiteContent = body_json(page).await;
    assert_eq!(content.profile.image_url, Some(upload.url));
}

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let app = common::test_app();
    let boundary = "test-boundary";

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/upload/image")
                .header(header::COOKIE, session_cookie())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(
                    boundary,
                    "application/zip",
                    b"PK...",
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resume_upload_must_be_pdf() {
    let app = common::test_app();
    let boundary = "test-boundary";

    let rejected = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/upload/resume")
                .header(header::COOKIE, session_cookie())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(boundary, "image/png", b"png")))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);

    let accepted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/admin/upload/resume")
                .header(header::COOKIE, session_cookie())
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(multipart_body(
                    boundary,
                    "application/pdf",
                    b"%PDF-1.7",
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(accepted.status(), StatusCode::OK);

    let page = app
        .oneshot(
            Request::builder()
                .uri("/api/content")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let content: SiteContent = body_json(page).await;
    assert!(content
        .profile
        .resume_url
        .is_some_and(|url| url.ends_with(".pdf")));
}
