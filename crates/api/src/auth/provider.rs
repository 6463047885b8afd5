//! REST client for the identity provider's user API.
//!
//! Implements [`IdentityProvider`] on top of [`reqwest`]: one
//! `GET {api_url}/users/{id}` per lookup, authenticated with the provider's
//! secret key.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use proofboard_core::identity::{IdentityProvider, IdentityProviderError, ProviderUser};
use reqwest::StatusCode;

/// Default timeout for provider requests, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Identity provider settings.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Base URL of the provider's backend API, e.g. `https://api.provider.test/v1`.
    pub api_url: String,
    /// Secret key sent as a Bearer token on backend API calls.
    pub secret_key: String,
    /// HMAC secret used to verify session tokens.
    pub session_secret: String,
    /// Per-request timeout for provider calls.
    pub timeout_secs: u64,
}

impl IdentityConfig {
    /// Load identity provider configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `IDENTITY_API_URL`        | **yes**  | --      |
    /// | `IDENTITY_SECRET_KEY`     | **yes**  | --      |
    /// | `IDENTITY_SESSION_SECRET` | **yes**  | --      |
    /// | `IDENTITY_TIMEOUT_SECS`   | no       | `10`    |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is unset or empty.
    pub fn from_env() -> Self {
        let api_url = required_env("IDENTITY_API_URL");
        let secret_key = required_env("IDENTITY_SECRET_KEY");
        let session_secret = required_env("IDENTITY_SESSION_SECRET");

        let timeout_secs: u64 = std::env::var("IDENTITY_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("IDENTITY_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            secret_key,
            session_secret,
            timeout_secs,
        }
    }
}

fn required_env(name: &str) -> String {
    let value = std::env::var(name).unwrap_or_else(|_| panic!("{name} must be set"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}

/// HTTP client for the identity provider's backend API.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    api_url: reqwest::Url,
    secret_key: String,
}

impl fmt::Debug for HttpIdentityProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpIdentityProvider")
            .field("api_url", &self.api_url.as_str())
            .field("secret_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HttpIdentityProvider {
    /// Build a client from configuration.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;
        Self::with_client(client, &config.api_url, &config.secret_key)
    }

    /// Create a provider client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        api_url: &str,
        secret_key: &str,
    ) -> Result<Self, IdentityProviderError> {
        let api_url = reqwest::Url::parse(api_url).map_err(|e| {
            IdentityProviderError::Request(format!("Invalid identity API URL '{api_url}': {e}"))
        })?;
        if api_url.cannot_be_a_base() {
            return Err(IdentityProviderError::Request(format!(
                "Identity API URL '{api_url}' cannot be used as a base"
            )));
        }
        Ok(Self {
            client,
            api_url,
            secret_key: secret_key.to_string(),
        })
    }

    /// `{api_url}/users/{identity_id}` with the ID percent-encoded as one segment.
    fn user_url(&self, identity_id: &str) -> reqwest::Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(identity_id);
        }
        url
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn fetch_user(
        &self,
        identity_id: &str,
    ) -> Result<Option<ProviderUser>, IdentityProviderError> {
        let response = self
            .client
            .get(self.user_url(identity_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(identity_id, "Identity provider has no such user");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| IdentityProviderError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(IdentityProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<ProviderUser>(&body)
            .map(Some)
            .map_err(|e| IdentityProviderError::Decode(e.to_string()))
    }
}
