//! Session-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use proofboard_core::identity::AuthContext;
use proofboard_db::models::user::UserWithSkills;

use crate::auth::resolver::require_authenticated_user;
use crate::auth::session::auth_context_from_headers;
use crate::error::AppError;
use crate::state::AppState;

/// Authentication context of the current request.
///
/// Reads the session token from `Authorization: Bearer <token>`, falling back
/// to the `__session` cookie when the header is missing or does not verify. Never rejects: a missing or invalid token gives
/// an anonymous context.
#[derive(Debug, Clone)]
pub struct SessionContext(pub AuthContext);

impl FromRequestParts<AppState> for SessionContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let cookie = parts.headers.get(COOKIE).and_then(|v| v.to_str().ok());

        let ctx = auth_context_from_headers(
            authorization,
            cookie,
            &state.config.identity.session_secret,
        );
        Ok(SessionContext(ctx))
    }
}

/// The resolved, persisted user behind the current request.
///
/// Provisions the user on first login. Rejects with 401 when the request has
/// no valid session or the provider does not know the identity.
///
/// ```ignore
/// async fn my_handler(CurrentUser(me): CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %me.user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserWithSkills);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let SessionContext(ctx) = SessionContext::from_request_parts(parts, state).await?;
        let user = require_authenticated_user(&state.pool, state.identity.as_ref(), &ctx).await?;
        Ok(CurrentUser(user))
    }
}
