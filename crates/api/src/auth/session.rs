//! Session token verification.
//!
//! The identity provider issues HS256-signed session JWTs whose `sub` is the
//! provider identity ID. This service only verifies them; it never issues
//! sessions of its own.

use jsonwebtoken::{decode, DecodingKey, Validation};
use proofboard_core::identity::AuthContext;
use serde::{Deserialize, Serialize};

/// Name of the cookie the provider's frontend SDK stores the session token in.
pub const SESSION_COOKIE: &str = "__session";

/// Claims carried by a provider session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the provider identity ID.
    pub sub: String,
    /// Provider session ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Validate and decode a session token, returning the embedded [`SessionClaims`].
///
/// Validates the signature and expiration.
pub fn validate_session_token(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Build the request's [`AuthContext`] from an optional raw token.
///
/// Anything short of a valid, unexpired token with a non-empty subject yields
/// an anonymous context.
pub fn auth_context_from_token(token: Option<&str>, secret: &str) -> AuthContext {
    let Some(token) = token else {
        return AuthContext::anonymous();
    };

    match validate_session_token(token, secret) {
        Ok(claims) if !claims.sub.is_empty() => AuthContext {
            identity_id: Some(claims.sub),
            session_id: claims.sid,
        },
        Ok(_) => {
            tracing::debug!("Session token has an empty subject");
            AuthContext::anonymous()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            AuthContext::anonymous()
        }
    }
}

/// Build the request's [`AuthContext`] from its `Authorization` and `Cookie`
/// header values.
///
/// The bearer token is tried first; when it is absent or does not verify,
/// the `__session` cookie is tried.
pub fn auth_context_from_headers(
    authorization: Option<&str>,
    cookie_header: Option<&str>,
    secret: &str,
) -> AuthContext {
    let bearer = auth_context_from_token(authorization.and_then(bearer_token), secret);
    if bearer.is_authenticated() {
        return bearer;
    }
    auth_context_from_token(cookie_header.and_then(session_cookie), secret)
}

/// Extract the token from an `Authorization` header value. The scheme is
/// matched case-insensitively.
pub fn bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Extract the session cookie value from a `Cookie` header.
pub fn session_cookie(cookie_header: &str) -> Option<&str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
