use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use regex::Regex;
use reqwest::Url;
use secrecy::Secret;
use serde_json::{Value, json};

use skillmatrix_adapters::{
    AesGcmLinkCipher, HashMapUserStore, LinkMailer, MockEmailClient, SessionTokenConfig,
    SessionTokenIssuer,
};
use skillmatrix_axum::AppState;
use skillmatrix_core::Email;
use skillmatrix_identity_service::IdentityService;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";
const TEST_LINK_KEY: [u8; 32] = [42; 32];

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub user_store: HashMapUserStore,
    pub mailbox: MockEmailClient,
    pub session_tokens: SessionTokenIssuer,
}

pub async fn spawn_app() -> TestApp {
    let user_store = HashMapUserStore::new();
    let mailbox = MockEmailClient::new();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    let notifier = LinkMailer::new(mailbox.clone(), Url::parse(&address).unwrap());
    let link_cipher =
        AesGcmLinkCipher::new(&Secret::from(URL_SAFE_NO_PAD.encode(TEST_LINK_KEY))).unwrap();
    let session_tokens = SessionTokenIssuer::new(SessionTokenConfig {
        signing_secret: Secret::from(TEST_JWT_SECRET.to_owned()),
        token_ttl_minutes: 10,
    });

    let state = AppState::new(
        user_store.clone(),
        notifier,
        link_cipher,
        session_tokens.clone(),
    );
    let service = IdentityService::new(state);

    tokio::spawn(async move {
        axum::serve(listener, service.into_router())
            .await
            .expect("Server crashed");
    });

    TestApp {
        address,
        http_client: reqwest::Client::new(),
        user_store,
        mailbox,
        session_tokens,
    }
}

impl TestApp {
    pub async fn post_signup(&self, body: &Value) -> reqwest::Response {
        self.http_client
            .post(format!("{}/signup", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_verify_email(&self, token: &str, email: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/verify-email", self.address))
            .query(&[("token", token), ("email", email)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_forgot_password(&self, email: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/forgot-password", self.address))
            .json(&json!({ "email_address": email }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_update_password(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> reqwest::Response {
        self.http_client
            .post(format!("{}/update-password", self.address))
            .json(&json!({
                "email": email,
                "password": password,
                "confirm_password": confirm_password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_verify_token(&self, bearer: Option<&str>) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}/verify-token", self.address));
        if let Some(token) = bearer {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request.send().await.expect("Failed to execute request")
    }

    /// A user as it would exist after the signup + verify-email flow.
    pub async fn register_verified_user(&self, email: &str, password: &str) {
        let response = self
            .post_signup(&json!({
                "full_name": "Test User",
                "email_address": email,
                "password": password,
                "confirm_password": password,
            }))
            .await;
        assert_eq!(response.status(), 200);

        let (token, link_email) = self.last_verification_link().await;
        let response = self.get_verify_email(&token, &link_email).await;
        assert_eq!(response.status(), 200);
    }

    /// Pull `(token, email)` back out of the most recently captured email.
    pub async fn last_verification_link(&self) -> (String, String) {
        let email = self
            .mailbox
            .last_email()
            .await
            .expect("no email was dispatched");

        let href = Regex::new(r#"href="([^"]+)""#)
            .unwrap()
            .captures(&email.content)
            .expect("no link in email body")[1]
            .to_owned();
        // The template HTML-escapes the query separator (askama emits `&#38;`).
        let url = Url::parse(&href.replace("&amp;", "&").replace("&#38;", "&"))
            .expect("link is not a valid URL");

        let mut token = None;
        let mut address = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "token" => token = Some(value.into_owned()),
                "email" => address = Some(value.into_owned()),
                _ => {}
            }
        }
        (
            token.expect("link has no token parameter"),
            address.expect("link has no email parameter"),
        )
    }

    pub async fn stored_user(&self, email: &str) -> Option<skillmatrix_core::User> {
        use skillmatrix_core::UserStore;
        let email = Email::try_from(Secret::from(email.to_owned())).unwrap();
        self.user_store.find_user(&email).await.unwrap()
    }
}

pub async fn body_json(response: reqwest::Response) -> Value {
    response.json().await.expect("response body is not JSON")
}
