//! Integration tests for first-login provisioning through
//! `resolve_current_user` / `require_authenticated_user`.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use common::{provider_user, FakeIdentityProvider};
use proofboard_api::auth::resolver::{require_authenticated_user, resolve_current_user};
use proofboard_api::error::AppError;
use proofboard_core::error::CoreError;
use proofboard_core::identity::{AuthContext, IdentityProviderError, ProviderUser};
use proofboard_db::models::skill::CreateSkill;
use proofboard_db::models::user::UpdateUserProfile;
use proofboard_db::repositories::{SkillRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn user_count(pool: &PgPool, id: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

fn blank_provider_user() -> ProviderUser {
    ProviderUser {
        email_addresses: vec![],
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        image_url: None,
    }
}

// ---------------------------------------------------------------------------
// Unauthenticated
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_context_resolves_to_none(pool: PgPool) {
    let provider = FakeIdentityProvider::new();

    let resolved = resolve_current_user(&pool, &provider, &AuthContext::anonymous())
        .await
        .unwrap();

    assert!(resolved.is_none());
    assert_eq!(provider.calls(), 0, "provider must not be called without identity");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_anonymous_context_is_unauthorized_when_required(pool: PgPool) {
    let provider = FakeIdentityProvider::new();

    let result = require_authenticated_user(&pool, &provider, &AuthContext::anonymous()).await;

    assert_matches!(result, Err(AppError::Core(CoreError::Unauthorized(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_identity_unknown_to_provider_resolves_to_none(pool: PgPool) {
    let provider = FakeIdentityProvider::new();
    let ctx = AuthContext::authenticated("user_orphan");

    let resolved = resolve_current_user(&pool, &provider, &ctx).await.unwrap();

    assert!(resolved.is_none());
    assert_eq!(user_count(&pool, "user_orphan").await, 0, "nothing may be created");

    let required = require_authenticated_user(&pool, &provider, &ctx).await;
    assert_matches!(required, Err(AppError::Core(CoreError::Unauthorized(_))));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_provider_failure_propagates(pool: PgPool) {
    let provider = FakeIdentityProvider::failing();
    let ctx = AuthContext::authenticated("u1");

    let result = resolve_current_user(&pool, &provider, &ctx).await;

    assert_matches!(
        result,
        Err(AppError::IdentityProvider(IdentityProviderError::Api { status: 503, .. }))
    );
    assert_eq!(user_count(&pool, "u1").await, 0);
}

// ---------------------------------------------------------------------------
// First login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_profile_creates_default_user(pool: PgPool) {
    let provider = FakeIdentityProvider::new().with_user("u1", blank_provider_user());

    let created = resolve_current_user(&pool, &provider, &AuthContext::authenticated("u1"))
        .await
        .unwrap()
        .expect("user should be provisioned");

    assert_eq!(created.user.id, "u1");
    assert_eq!(created.user.email, "");
    assert_eq!(created.user.name, "User");
    assert_eq!(created.user.avatar, None);
    assert_eq!(created.user.dream_companies, "");
    assert_eq!(created.user.career_goals, "");
    assert_eq!(created.user.experience, "BEGINNER");
    assert_eq!(created.user.reputation, 0);
    assert!(created.skills.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_session_id_does_not_affect_provisioning(pool: PgPool) {
    let provider = FakeIdentityProvider::new().with_user("u1", blank_provider_user());
    let ctx = AuthContext {
        identity_id: Some("u1".into()),
        session_id: Some("sess_abc".into()),
    };

    let created = resolve_current_user(&pool, &provider, &ctx)
        .await
        .unwrap()
        .expect("user should be provisioned");

    assert_eq!(created.user.id, "u1");
    assert_eq!(user_count(&pool, "u1").await, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_profile_creates_named_user(pool: PgPool) {
    let provider =
        FakeIdentityProvider::new().with_user("u2", provider_user(&["a@b.com"], "Ann", "Lee"));

    let created = resolve_current_user(&pool, &provider, &AuthContext::authenticated("u2"))
        .await
        .unwrap()
        .expect("user should be provisioned");

    assert_eq!(created.user.email, "a@b.com");
    assert_eq!(created.user.name, "Ann Lee");
    assert_eq!(created.user.avatar.as_deref(), Some("https://img.test/Ann.png"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_resolution_returns_same_record(pool: PgPool) {
    let provider = FakeIdentityProvider::new().with_user("u1", blank_provider_user());
    let ctx = AuthContext::authenticated("u1");

    let first = resolve_current_user(&pool, &provider, &ctx)
        .await
        .unwrap()
        .unwrap();
    let second = resolve_current_user(&pool, &provider, &ctx)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, second);
    assert!(second.skills.is_empty());
    assert_eq!(user_count(&pool, "u1").await, 1);
}

// ---------------------------------------------------------------------------
// Existing users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_user_is_not_mutated(pool: PgPool) {
    let provider = FakeIdentityProvider::new().with_user("u3", provider_user(&[], "Old", "Name"));
    let ctx = AuthContext::authenticated("u3");

    resolve_current_user(&pool, &provider, &ctx).await.unwrap();
    let onboarded = UserRepo::update_profile(
        &pool,
        "u3",
        &UpdateUserProfile {
            experience: Some("MID".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    // The provider now reports a different name and email; the stored row wins.
    let renamed = FakeIdentityProvider::new()
        .with_user("u3", provider_user(&["new@x.io"], "New", "Name"));
    let resolved = resolve_current_user(&pool, &renamed, &ctx)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resolved.user, onboarded);
    assert_eq!(resolved.user.name, "Old Name");
    assert_eq!(resolved.user.updated_at, onboarded.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_existing_user_includes_skills(pool: PgPool) {
    let provider = FakeIdentityProvider::new().with_user("u4", blank_provider_user());
    let ctx = AuthContext::authenticated("u4");
    resolve_current_user(&pool, &provider, &ctx).await.unwrap();

    SkillRepo::create(
        &pool,
        &CreateSkill {
            user_id: "u4".into(),
            skill_name: "Rust".into(),
            category: "BACKEND".into(),
            current_level: 6,
            confidence_score: 70,
            proofs_completed: 2,
        },
    )
    .await
    .unwrap();

    let resolved = require_authenticated_user(&pool, &provider, &ctx)
        .await
        .unwrap();
    assert_eq!(resolved.skills.len(), 1);
    assert_eq!(resolved.skills[0].skill_name, "Rust");
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_first_logins_create_one_row(pool: PgPool) {
    let provider = Arc::new(
        FakeIdentityProvider::new().with_user("u_race", provider_user(&["r@x.io"], "Race", "Y")),
    );
    let ctx = AuthContext::authenticated("u_race");

    let attempts = (0..8).map(|_| {
        let pool = pool.clone();
        let provider = Arc::clone(&provider);
        let ctx = ctx.clone();
        tokio::spawn(async move {
            require_authenticated_user(&pool, provider.as_ref(), &ctx).await
        })
    });

    let results = futures::future::join_all(attempts).await;

    for result in results {
        let resolved = result
            .expect("task should not panic")
            .expect("every concurrent call must resolve a user");
        assert_eq!(resolved.user.id, "u_race");
        assert_eq!(resolved.user.name, "Race Y");
    }
    assert_eq!(user_count(&pool, "u_race").await, 1);
}
