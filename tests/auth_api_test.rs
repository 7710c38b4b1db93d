//! HTTP tests for login, registration and the health endpoint

#[macro_use]
mod helpers;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use helpers::*;

#[actix_web::test]
async fn test_admin_login_returns_bearer_token() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload(ADMIN_EMAIL, ADMIN_PASSWORD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "Bearer");
    assert_eq!(body["username"], ADMIN_EMAIL);
    assert_eq!(body["firstName"], "Admin");
    assert_eq!(body["admin"], true);
    assert!(!body["token"].as_str().unwrap_or_default().is_empty());
}

#[actix_web::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload(ADMIN_EMAIL, "wrong-password"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert!(body["message"].as_str().unwrap_or_default().contains("Bad credentials"));
}

#[actix_web::test]
async fn test_login_with_blank_fields_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload("", ""))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_register_then_login() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(signup_payload("toto@todo.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully!");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(login_payload("toto@todo.com", "password123"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["admin"], false);
    assert_eq!(body["lastName"], "Tata");
}

#[actix_web::test]
async fn test_register_with_taken_email_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(signup_payload(ADMIN_EMAIL))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Error: Email is already taken!");
}

#[actix_web::test]
async fn test_register_with_invalid_payload_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let mut payload = signup_payload("not-an-email");
    payload["password"] = "abc".into();
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_health_is_public() {
    let ctx = TestContext::new().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "UP");
}
