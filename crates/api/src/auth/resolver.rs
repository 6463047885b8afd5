//! Resolution of the calling user, provisioning a record on first login.
//!
//! The authentication context is passed in explicitly. Provisioning relies on
//! the `users` primary key: when two first requests for the same identity
//! race, the loser's insert fails with a unique violation and it re-reads the
//! row the winner created.

use proofboard_core::error::CoreError;
use proofboard_core::identity::{derive_new_user, AuthContext, IdentityProvider};
use proofboard_db::models::user::{CreateUser, UserWithSkills};
use proofboard_db::repositories::UserRepo;
use proofboard_db::DbPool;

use crate::error::{AppError, AppResult};

/// Resolve the caller to a persisted user, creating it on first sight.
///
/// Returns `Ok(None)` when the context carries no identity or the provider
/// has no record for it. Provider and database failures are errors.
/// An existing user is returned as stored, without any write.
pub async fn resolve_current_user(
    pool: &DbPool,
    provider: &dyn IdentityProvider,
    ctx: &AuthContext,
) -> AppResult<Option<UserWithSkills>> {
    let Some(identity_id) = ctx.identity_id.as_deref() else {
        return Ok(None);
    };

    let Some(profile) = provider.fetch_user(identity_id).await? else {
        tracing::warn!(identity_id, "Valid session for an identity the provider does not know");
        return Ok(None);
    };

    if let Some(existing) = UserRepo::find_with_skills(pool, identity_id).await? {
        return Ok(Some(existing));
    }

    let fields = derive_new_user(&profile);
    let input = CreateUser {
        id: identity_id.to_string(),
        email: fields.email,
        name: fields.name,
        avatar: fields.avatar,
        dream_companies: String::new(),
        career_goals: String::new(),
    };

    match UserRepo::create_with_skills(pool, &input).await {
        Ok(created) => {
            tracing::info!(
                user_id = %created.user.id,
                session_id = ctx.session_id.as_deref().unwrap_or("-"),
                "Provisioned user on first login"
            );
            Ok(Some(created))
        }
        Err(err) if proofboard_db::is_unique_violation(&err) => {
            tracing::debug!(
                identity_id,
                session_id = ctx.session_id.as_deref().unwrap_or("-"),
                "User created concurrently, re-reading"
            );
            let winner = UserRepo::find_with_skills(pool, identity_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "User {identity_id} vanished after a conflicting insert"
                    ))
                })?;
            Ok(Some(winner))
        }
        Err(err) => Err(err.into()),
    }
}

/// Like [`resolve_current_user`], but an unresolved caller is `Unauthorized`.
pub async fn require_authenticated_user(
    pool: &DbPool,
    provider: &dyn IdentityProvider,
    ctx: &AuthContext,
) -> AppResult<UserWithSkills> {
    resolve_current_user(pool, provider, ctx)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Unauthorized".into())))
}
