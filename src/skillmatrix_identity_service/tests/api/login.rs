use secrecy::ExposeSecret;
use serde_json::json;

use crate::helpers::{body_json, spawn_app};

#[tokio::test]
async fn login_issues_a_token_whose_subject_is_the_email() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-p1").await;

    let response = app.post_login("a@x.com", "password-p1").await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Login successful");
    let access_token = body["data"]["access_token"].as_str().unwrap();
    assert_eq!(access_token.split('.').count(), 3);

    let claims = app.session_tokens.validate(access_token).unwrap();
    assert_eq!(claims.sub.expose_secret(), "a@x.com");
}

#[tokio::test]
async fn a_wrong_password_is_rejected_without_a_token() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-p1").await;

    let response = app.post_login("a@x.com", "password-wrong").await;
    assert_eq!(response.status(), 400);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Incorrect password");
    assert_eq!(body["data"], json!({}));
}

#[tokio::test]
async fn an_unknown_email_is_rejected() {
    let app = spawn_app().await;

    let response = app.post_login("ghost@x.com", "password-p1").await;
    assert_eq!(response.status(), 400);

    let body = body_json(response).await;
    assert_eq!(body["message"], "No account exists for this email");
}

#[tokio::test]
async fn an_unverified_account_may_not_log_in() {
    let app = spawn_app().await;
    let response = app
        .post_signup(&json!({
            "full_name": "A",
            "email_address": "a@x.com",
            "password": "password-p1",
            "confirm_password": "password-p1",
        }))
        .await;
    assert_eq!(response.status(), 200);

    let response = app.post_login("a@x.com", "password-p1").await;
    assert_eq!(response.status(), 400);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Account email has not been verified");
}
