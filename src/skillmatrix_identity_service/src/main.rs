use color_eyre::eyre::Result;
use reqwest::{Client as HttpClient, Url};
use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use skillmatrix_adapters::{
    AesGcmLinkCipher, LinkMailer, PostgresUserStore, PostmarkEmailClient, SessionTokenConfig,
    SessionTokenIssuer, Settings,
};
use skillmatrix_axum::AppState;
use skillmatrix_core::Email;
use skillmatrix_identity_service::IdentityService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    let config = Settings::load()?;

    // Setup database connection pool
    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(config.database.url.expose_secret())
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pg_pool).await?;

    let user_store = PostgresUserStore::new(pg_pool);

    // Create email client and the link mailer on top of it
    let http_client = HttpClient::builder()
        .timeout(config.email_client.timeout())
        .build()?;

    let email_client = PostmarkEmailClient::new(
        config.email_client.base_url.clone(),
        Email::try_from(Secret::from(config.email_client.sender.clone()))?,
        config.email_client.authorization_token.clone(),
        http_client,
    );

    let notifier = LinkMailer::new(
        email_client,
        Url::parse(&config.application.public_base_url)?,
    );

    // Process-wide crypto services
    let link_cipher = AesGcmLinkCipher::new(&config.auth.link_encryption_key)?;
    let session_tokens = SessionTokenIssuer::new(SessionTokenConfig {
        signing_secret: config.auth.jwt_secret.clone(),
        token_ttl_minutes: config.auth.token_ttl_minutes,
    });

    let state = AppState::new(user_store, notifier, link_cipher, session_tokens);

    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await?;

    IdentityService::new(state).run(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
