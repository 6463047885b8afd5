#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use proofboard_api::app::build_app;
use proofboard_api::auth::provider::IdentityConfig;
use proofboard_api::auth::session::SessionClaims;
use proofboard_api::config::ServerConfig;
use proofboard_api::state::AppState;
use proofboard_core::identity::{
    IdentityProvider, IdentityProviderError, ProviderEmailAddress, ProviderUser,
};
use sqlx::PgPool;
use tower::ServiceExt;

/// HMAC secret shared by [`test_config`] and [`session_token`].
pub const TEST_SESSION_SECRET: &str = "test-session-secret-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 5,
        identity: IdentityConfig {
            api_url: "http://identity.invalid".to_string(),
            secret_key: "sk_test".to_string(),
            session_secret: TEST_SESSION_SECRET.to_string(),
            timeout_secs: 5,
        },
    }
}

// ---------------------------------------------------------------------------
// Fake identity provider
// ---------------------------------------------------------------------------

/// In-memory identity provider.
#[derive(Default)]
pub struct FakeIdentityProvider {
    users: HashMap<String, ProviderUser>,
    failing: bool,
    calls: AtomicUsize,
}

impl FakeIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every lookup fails with a 503.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_user(mut self, identity_id: &str, user: ProviderUser) -> Self {
        self.users.insert(identity_id.to_string(), user);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    async fn fetch_user(
        &self,
        identity_id: &str,
    ) -> Result<Option<ProviderUser>, IdentityProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(IdentityProviderError::Api {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.users.get(identity_id).cloned())
    }
}

/// Provider profile with the given emails and names.
pub fn provider_user(emails: &[&str], first: &str, last: &str) -> ProviderUser {
    ProviderUser {
        email_addresses: emails
            .iter()
            .map(|e| ProviderEmailAddress {
                email_address: e.to_string(),
            })
            .collect(),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        image_url: Some(format!("https://img.test/{first}.png")),
    }
}

// ---------------------------------------------------------------------------
// App / request helpers
// ---------------------------------------------------------------------------

/// Build the full application router with the given pool and provider.
pub fn build_test_app(pool: PgPool, provider: Arc<FakeIdentityProvider>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        identity: provider,
    };
    build_app(state)
}

/// Issue a session token for `identity_id` signed with [`TEST_SESSION_SECRET`].
pub fn session_token(identity_id: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: identity_id.to_string(),
        sid: Some(format!("sess_{identity_id}")),
        exp: now + 600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SESSION_SECRET.as_bytes()),
    )
    .expect("token encoding should succeed")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
