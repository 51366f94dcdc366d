use serde_json::json;

use crate::helpers::{body_json, spawn_app};

#[tokio::test]
async fn forgot_password_dispatches_a_reset_link() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-p1").await;

    let response = app.post_forgot_password("a@x.com").await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Password reset email sent");

    let email = app.mailbox.last_email().await.unwrap();
    assert_eq!(email.recipient, "a@x.com");
    assert_eq!(email.subject, "Password Reset | Skill Matrix");
}

#[tokio::test]
async fn forgot_password_does_not_reveal_whether_an_account_exists() {
    let app = spawn_app().await;

    let response = app.post_forgot_password("nobody@x.com").await;
    assert_eq!(response.status(), 200);
    assert_eq!(app.mailbox.sent_emails().await.len(), 1);
}

#[tokio::test]
async fn a_reset_link_proves_ownership_without_touching_activation() {
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

    // Request a reset while the account is still pending.
    assert_eq!(app.post_forgot_password("a@x.com").await.status(), 200);

    let (token, email) = app.last_verification_link().await;
    let response = app.get_verify_email(&token, &email).await;
    assert_eq!(response.status(), 200);

    // A reset link must not be usable as an activation link.
    assert!(!app.stored_user("a@x.com").await.unwrap().is_active());
}

#[tokio::test]
async fn the_full_reset_flow_replaces_the_credential() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-old").await;

    assert_eq!(app.post_forgot_password("a@x.com").await.status(), 200);
    let (token, email) = app.last_verification_link().await;
    assert_eq!(app.get_verify_email(&token, &email).await.status(), 200);

    let response = app
        .post_update_password("a@x.com", "password-new", "password-new")
        .await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Password changed successfully");

    // Old credential is gone, new one works.
    assert_eq!(app.post_login("a@x.com", "password-old").await.status(), 400);
    assert_eq!(app.post_login("a@x.com", "password-new").await.status(), 200);
}

#[tokio::test]
async fn update_password_with_mismatched_confirmation_changes_nothing() {
    let app = spawn_app().await;
    app.register_verified_user("a@x.com", "password-old").await;

    let response = app
        .post_update_password("a@x.com", "password-new", "password-other")
        .await;
    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Password and confirm password do not match");

    assert_eq!(app.post_login("a@x.com", "password-old").await.status(), 200);
}

#[tokio::test]
async fn update_password_for_an_unknown_email_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .post_update_password("ghost@x.com", "password-new", "password-new")
        .await;
    assert_eq!(response.status(), 400);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No account exists for this email");
}
