use secrecy::ExposeSecret;
use serde_json::json;

use crate::helpers::{body_json, spawn_app};

#[tokio::test]
async fn signup_persists_an_inactive_user_and_dispatches_a_verification_email() {
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
    let body = body_json(response).await;
    assert_eq!(body["message"], "User registered, email verification awaited");
    assert_eq!(body["data"]["email_address"], "a@x.com");
    assert_eq!(body["data"]["full_name"], "A");
    let hashed = body["data"]["hashed_password"].as_str().unwrap();
    assert!(hashed.starts_with("$argon2id$"));

    let user = app.stored_user("a@x.com").await.expect("user not persisted");
    assert!(!user.is_active());
    assert_eq!(user.password_hash().as_ref().expose_secret(), hashed);

    let emails = app.mailbox.sent_emails().await;
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].recipient, "a@x.com");
    assert_eq!(emails[0].subject, "Email Verification | Skill Matrix");
}

#[tokio::test]
async fn mismatched_confirmation_returns_400_and_persists_nothing() {
    let app = spawn_app().await;

    let response = app
        .post_signup(&json!({
            "full_name": "A",
            "email_address": "a@x.com",
            "password": "password-p1",
            "confirm_password": "password-p2",
        }))
        .await;

    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Password and confirm password do not match");

    assert!(app.stored_user("a@x.com").await.is_none());
    assert!(app.mailbox.sent_emails().await.is_empty());
}

#[tokio::test]
async fn duplicate_email_returns_400_and_does_not_alter_the_existing_record() {
    let app = spawn_app().await;

    let first = app
        .post_signup(&json!({
            "full_name": "First",
            "email_address": "dup@x.com",
            "password": "password-p1",
            "confirm_password": "password-p1",
        }))
        .await;
    assert_eq!(first.status(), 200);
    let original_hash = app
        .stored_user("dup@x.com")
        .await
        .unwrap()
        .password_hash()
        .as_ref()
        .expose_secret()
        .clone();

    let second = app
        .post_signup(&json!({
            "full_name": "Second",
            "email_address": "dup@x.com",
            "password": "password-p2",
            "confirm_password": "password-p2",
        }))
        .await;

    assert_eq!(second.status(), 400);
    let body = body_json(second).await;
    assert_eq!(body["message"], "An account with this email already exists");

    let stored = app.stored_user("dup@x.com").await.unwrap();
    assert_eq!(stored.full_name().as_ref(), "First");
    assert_eq!(
        stored.password_hash().as_ref().expose_secret(),
        &original_hash
    );
}

#[tokio::test]
async fn malformed_email_returns_400() {
    let app = spawn_app().await;

    let response = app
        .post_signup(&json!({
            "full_name": "A",
            "email_address": "not-an-email",
            "password": "password-p1",
            "confirm_password": "password-p1",
        }))
        .await;

    assert_eq!(response.status(), 400);
    assert!(app.mailbox.sent_emails().await.is_empty());
}
