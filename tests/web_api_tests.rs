//! Integration tests for the web preview server.
//!
//! Requests go through the router in-process with `tower::ServiceExt::oneshot`.

#![cfg(feature = "web")]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use folio::config::Config;
use folio::models::SiteContent;
use folio::state::ComposeRequest;
use folio::web::{create_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

fn create_test_app() -> Router {
    let state = AppState::with_content(Config::default(), SiteContent::builtin());
    create_router(state)
}

async fn body_text(response: axum::response::Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> axum::response::Response {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri, None).await;
    let status = response.status();
    let json = serde_json::from_str(&body_text(response).await).unwrap_or(Value::Null);
    (status, json)
}

fn location(response: &axum::response::Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_index_renders_light_page() {
    let app = create_test_app();
    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains(r##"<a href="#home" class="active">"##));
    assert!(html.contains(r#"id="projects""#));
    assert!(html.contains(r#"action="/theme""#));
    assert!(html.contains(r#"data-lookahead="120""#));
}

#[tokio::test]
async fn test_index_restores_dark_cookie() {
    let app = create_test_app();
    let response = get(&app, "/", Some("other=1; theme=dark")).await;

    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="en" class="dark">"#));
}

#[tokio::test]
async fn test_index_replaces_unrecognized_theme_cookie() {
    let app = create_test_app();
    let response = get(&app, "/", Some("theme=sepia")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("theme=light;"), "cookie: {cookie}");
    let html = body_text(response).await;
    assert!(html.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_index_refreshes_stored_theme_cookie() {
    let app = create_test_app();
    let response = get(&app, "/", Some("theme=dark")).await;

    let cookie = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(cookie.to_str().unwrap().starts_with("theme=dark;"));
}

#[tokio::test]
async fn test_index_clamps_project_query() {
    let app = create_test_app();
    let projects = SiteContent::builtin().projects;
    let last = projects.last().unwrap();

    let response = get(&app, "/?project=999", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!("{} / {}", projects.len(), projects.len())));
    assert!(html.contains(&last.title));
}

#[tokio::test]
async fn test_theme_toggle_sets_cookie_and_redirects() {
    let app = create_test_app();
    let response = post_form(&app, "/theme", "project=1").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?project=1");
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("theme=dark;"), "cookie: {cookie}");
}

#[tokio::test]
async fn test_theme_toggle_back_to_light() {
    let app = create_test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::COOKIE, "theme=dark")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookie = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(cookie.to_str().unwrap().starts_with("theme=light;"));
}

#[tokio::test]
async fn test_contact_redirects_to_mailto() {
    let app = create_test_app();
    let response = post_form(&app, "/contact", "name=A%26B&email=ab%40example.com&message=Hi+there").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let request = ComposeRequest::from_uri(&location(&response)).unwrap();
    assert_eq!(request.recipient, "madhav@example.com");
    assert_eq!(request.subject, "Portfolio contact from A&B");
    assert_eq!(request.body, "Hi there\n\nA&B <ab@example.com>");
}

#[tokio::test]
async fn test_contact_rejects_blank_form() {
    let app = create_test_app();
    let response = post_form(&app, "/contact", "name=+&email=&message=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "The contact form is empty");
}

#[tokio::test]
async fn test_get_content() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/content").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["profile"]["name"], "Madhav");
    assert_eq!(json["nav"][0]["label"], "Home");
}

#[tokio::test]
async fn test_get_project() {
    let app = create_test_app();
    let expected = SiteContent::builtin().projects[0].title.clone();
    let (status, json) = get_json(&app, "/api/projects/0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], expected);
}

#[tokio::test]
async fn test_get_project_not_found() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/projects/99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Project not found");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_assets_served_from_configured_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("resume.pdf"), b"%PDF-1.4").unwrap();

    let mut config = Config::default();
    config.content.asset_dir = Some(temp.path().to_path_buf());
    let app = create_router(AppState::with_content(config, SiteContent::builtin()));

    let response = get(&app, "/resume.pdf", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "%PDF-1.4");

    let response = get(&app, "/missing.png", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
