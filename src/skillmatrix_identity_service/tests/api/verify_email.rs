use serde_json::json;

use crate::helpers::{body_json, spawn_app};

async fn signup(app: &crate::helpers::TestApp, email: &str) {
    let response = app
        .post_signup(&json!({
            "full_name": "A",
            "email_address": email,
            "password": "password-p1",
            "confirm_password": "password-p1",
        }))
        .await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn the_emailed_link_activates_the_user() {
    let app = spawn_app().await;
    signup(&app, "a@x.com").await;

    let (token, email) = app.last_verification_link().await;
    assert_eq!(email, "a@x.com");

    let response = app.get_verify_email(&token, &email).await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Email verification successful");
    assert_eq!(body["data"]["email"], "a@x.com");

    assert!(app.stored_user("a@x.com").await.unwrap().is_active());
}

#[tokio::test]
async fn verifying_twice_is_a_harmless_no_op() {
    let app = spawn_app().await;
    signup(&app, "a@x.com").await;

    let (token, email) = app.last_verification_link().await;
    assert_eq!(app.get_verify_email(&token, &email).await.status(), 200);
    assert_eq!(app.get_verify_email(&token, &email).await.status(), 200);
    assert!(app.stored_user("a@x.com").await.unwrap().is_active());
}

#[tokio::test]
async fn a_tampered_token_is_rejected() {
    let app = spawn_app().await;
    signup(&app, "a@x.com").await;

    let (token, email) = app.last_verification_link().await;
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = app.get_verify_email(&tampered, &email).await;
    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid or tampered verification link");

    assert!(!app.stored_user("a@x.com").await.unwrap().is_active());
}

#[tokio::test]
async fn the_supplied_email_must_match_the_sealed_one() {
    let app = spawn_app().await;
    signup(&app, "a@x.com").await;
    signup(&app, "b@x.com").await;

    // Token sealed for b, query claims a.
    let (token_for_b, _) = app.last_verification_link().await;
    let response = app.get_verify_email(&token_for_b, "a@x.com").await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Verification failed");

    assert!(!app.stored_user("a@x.com").await.unwrap().is_active());
    assert!(!app.stored_user("b@x.com").await.unwrap().is_active());
}

#[tokio::test]
async fn an_activation_link_for_an_unknown_account_is_rejected() {
    let app = spawn_app().await;
    signup(&app, "a@x.com").await;
    let (token, email) = app.last_verification_link().await;

    // Simulate the account disappearing between signup and verification by
    // using a second app instance sharing the same keys but an empty store.
    let empty_app = spawn_app().await;
    let response = empty_app.get_verify_email(&token, &email).await;
    assert_eq!(response.status(), 400);
}
