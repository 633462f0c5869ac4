use std::time::Duration;

use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    entities::Locale,
    errors::{InvalidRon, ReadError},
};

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "MANDI_API_URL";

/// Client settings, normally read from a RON file:
///
/// ```ron
/// (
///     api_url: "https://mandi.example.com",
///     request_timeout_secs: 15,
///     default_locale: ur,
/// )
/// ```
///
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, serde_derive::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    /// Used when a verified owner is unknown to the backend and gets
    /// registered on first sign-in.
    pub default_business_name: String,
    pub default_locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            default_business_name: "My Mandi Shop".to_string(),
            default_locale: Locale::English,
        }
    }
}

impl ClientConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("ClientConfig", &e))
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&raw)
    }

    /// Apply `MANDI_API_URL` if set and non-empty.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => {
                debug!(api_url = %url, "API URL taken from environment");
                Self {
                    api_url: url.trim().to_string(),
                    ..self
                }
            }
            _ => self,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
