//! Identity provider seam and first-login user derivation.
//!
//! The identity provider is the source of truth for who the caller is. This
//! module defines:
//!
//! - [`AuthContext`] -- the per-request authentication state, passed explicitly
//!   to the resolver instead of being looked up ambiently.
//! - [`IdentityProvider`] -- the profile lookup the resolver depends on.
//! - [`derive_new_user`] -- the rules used to build a user record the first
//!   time an identity is seen.

use async_trait::async_trait;
use serde::Deserialize;

use crate::types::IdentityId;

/// Display name assigned when the provider supplies neither a first nor a last name.
pub const DEFAULT_USER_NAME: &str = "User";

/// Authentication state of a single inbound request.
///
/// An empty context is the normal "not logged in" state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    /// Provider-assigned identity ID of the caller, if a valid session was presented.
    pub identity_id: Option<IdentityId>,
    /// Provider session ID, when the session token carries one.
    pub session_id: Option<String>,
}

impl AuthContext {
    /// Context for a request without a valid session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a request authenticated as `identity_id`.
    pub fn authenticated(identity_id: impl Into<IdentityId>) -> Self {
        Self {
            identity_id: Some(identity_id.into()),
            session_id: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity_id.is_some()
    }
}

/// One email address attached to a provider user.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProviderEmailAddress {
    pub email_address: String,
}

/// User profile as returned by the identity provider.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ProviderUser {
    #[serde(default)]
    pub email_addresses: Vec<ProviderEmailAddress>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Errors raised while talking to the identity provider.
#[derive(Debug, thiserror::Error)]
pub enum IdentityProviderError {
    /// The request never produced a response (network, DNS, TLS, timeout).
    #[error("Identity provider request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status other than 404.
    #[error("Identity provider error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The provider answered 2xx but the body could not be decoded.
    #[error("Identity provider returned an invalid body: {0}")]
    Decode(String),
}

/// Lookup of provider-side user profiles.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the provider profile for `identity_id`.
    ///
    /// Returns `Ok(None)` when the provider has no such user.
    async fn fetch_user(
        &self,
        identity_id: &str,
    ) -> Result<Option<ProviderUser>, IdentityProviderError>;
}

/// Field values for a user record created on first sight of an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserFields {
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// First listed email address, or an empty string when there is none.
pub fn primary_email(user: &ProviderUser) -> String {
    user.email_addresses
        .first()
        .map(|e| e.email_address.clone())
        .unwrap_or_default()
}

/// `"{first} {last}"` trimmed, falling back to [`DEFAULT_USER_NAME`] when blank.
///
/// A missing name part counts as an empty string.
pub fn display_name(first_name: Option<&str>, last_name: Option<&str>) -> String {
    let full = format!(
        "{} {}",
        first_name.unwrap_or_default(),
        last_name.unwrap_or_default()
    );
    let trimmed = full.trim();
    if trimmed.is_empty() {
        DEFAULT_USER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Build the initial user fields from a provider profile.
pub fn derive_new_user(user: &ProviderUser) -> NewUserFields {
    NewUserFields {
        email: primary_email(user),
        name: display_name(user.first_name.as_deref(), user.last_name.as_deref()),
        avatar: user.image_url.clone(),
    }
}
