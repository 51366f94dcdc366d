use secrecy::Secret;
use serde_json::json;

use skillmatrix_adapters::{SessionTokenConfig, SessionTokenIssuer};
use skillmatrix_core::Email;

use crate::helpers::{TEST_JWT_SECRET, body_json, spawn_app};

#[tokio::test]
async fn a_fresh_bearer_token_is_accepted() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-p1").await;

    let login = body_json(app.post_login("a@x.com", "password-p1").await).await;
    let access_token = login["data"]["access_token"].as_str().unwrap().to_owned();

    let response = app.post_verify_token(Some(&access_token)).await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn a_missing_bearer_token_is_unauthorized() {
    let app = spawn_app().await;

    let response = app.post_verify_token(None).await;
    assert_eq!(response.status(), 401);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Missing bearer token");
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn a_garbage_bearer_token_is_unauthorized() {
    let app = spawn_app().await;

    let response = app.post_verify_token(Some("not-a-jwt")).await;
    assert_eq!(response.status(), 401);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn an_expired_bearer_token_is_unauthorized() {
    let app = spawn_app().await;

    // Same signing secret as the app, but already past its expiry.
    let expired_issuer = SessionTokenIssuer::new(SessionTokenConfig {
        signing_secret: Secret::from(TEST_JWT_SECRET.to_owned()),
        token_ttl_minutes: -5,
    });
    let email = Email::try_from(Secret::from("a@x.com".to_owned())).unwrap();
    let expired = expired_issuer.issue(&email).unwrap();

    let response = app.post_verify_token(Some(&expired)).await;
    assert_eq!(response.status(), 401);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Token has expired");
}
