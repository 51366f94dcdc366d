use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

/// Process-wide settings.
///
/// Loaded once at startup from an optional `configuration.yaml` plus
/// `SKILLMATRIX_`-prefixed environment variables (`__` as section
/// separator, e.g. `SKILLMATRIX_AUTH__JWT_SECRET`). The secrets have no
/// defaults: a deployment that does not provide them fails to boot.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// The externally reachable base URL embedded in verification links.
    pub public_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// HMAC secret for session token signing.
    pub jwt_secret: Secret<String>,
    pub token_ttl_minutes: i64,
    /// URL-safe base64 (unpadded) encoding of the 32-byte AES-256 key used
    /// for verification links.
    pub link_encryption_key: Secret<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender: String,
    pub authorization_token: Secret<String>,
    pub timeout_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigError> {
        // Populate the environment from a local .env file when present.
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                Environment::with_prefix("SKILLMATRIX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn default_max_connections() -> u32 {
    5
}
