//! End-to-end tests for the auth endpoints, driving the assembled router
//! with an in-memory user store.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use medibook::auth::hasher::PasswordHasher;
use medibook::auth::testing::MemoryStore;
use medibook::auth::users::UserStore;
use medibook::routes::create_router;
use medibook::server::state::AppState;

fn app() -> Router {
    let store: Arc<dyn UserStore> = Arc::new(MemoryStore::new());
    let hasher = PasswordHasher::new(4); // bcrypt MIN_COST, keeps tests fast
    create_router(AppState { store, hasher })
}

async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_signup_then_signin_round_trip() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "pw1",
            "roleString": "PATIENT",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Successfully signed up");

    // Untrimmed username still signs in
    let (status, body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": " alice ", "password": "pw1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "PATIENT");
    assert!(body["id"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let (status, body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": "alice", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_admin_round_trip() {
    let app = app();

    let (status, _) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "root",
            "email": "root@x.com",
            "password": "pw-admin",
            "roleString": "admin",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": "root", "password": "pw-admin" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_signup_missing_fields_is_bad_request() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/auth/signup",
        json!({ "username": "alice", "password": "pw1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Username, password, email, and role are required and cannot be empty"
    );
}

#[tokio::test]
async fn test_signup_conflicts() {
    let app = app();

    let alice = json!({
        "username": "alice",
        "email": "a@x.com",
        "password": "pw1",
        "roleString": "PATIENT",
    });
    let (status, _) = post(&app, "/api/auth/signup", alice).await;
    assert_eq!(status, StatusCode::OK);

    // Same username, different email
    let (status, body) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "alice",
            "email": "b@x.com",
            "password": "pw2",
            "roleString": "ADMIN",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Username already exists");

    // Same email, different username
    let (status, body) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "bob",
            "email": "a@x.com",
            "password": "pw2",
            "roleString": "PATIENT",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_doctor_signup_requires_and_stores_doctor_fields() {
    let app = app();

    let (status, body) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "drbob",
            "email": "dr@x.com",
            "password": "pw1",
            "roleString": "doctor",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Specialty is required for doctors");

    let (status, _) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "drbob",
            "email": "dr@x.com",
            "password": "pw1",
            "roleString": "doctor",
            "specialty": "Cardiology",
            "licenseNumber": "LIC-1",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": "drbob", "password": "pw1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "DOCTOR");
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_responses_are_identical() {
    let app = app();

    let (status, _) = post(
        &app,
        "/api/auth/signup",
        json!({
            "username": "alice",
            "email": "a@x.com",
            "password": "pw1",
            "roleString": "PATIENT",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (unknown_status, unknown_body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": "nobody", "password": "pw1" }),
    )
    .await;
    let (wrong_status, wrong_body) = post(
        &app,
        "/api/auth/signin",
        json!({ "username": "alice", "password": "wrong" }),
    )
    .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, wrong_status);
    assert_eq!(unknown_body, wrong_body);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = app();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/nope")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend_origin() {
    let app = app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/auth/signin")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}
