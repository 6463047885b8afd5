//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUserProfile, User, UserWithSkills};
use crate::repositories::SkillRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, name, avatar, dream_companies, career_goals, role_title, \
                       experience, reputation, created_at, updated_at";

/// Provides lookup, provisioning and profile updates for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation (`23505`) if a row with the same `id`
    /// already exists; see [`crate::is_unique_violation`].
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, name, avatar, dream_companies, career_goals)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.id)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.avatar)
            .bind(&input.dream_companies)
            .bind(&input.career_goals)
            .fetch_one(pool)
            .await
    }

    /// Find a user by identity ID.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by identity ID, eagerly including its skills.
    pub async fn find_with_skills(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<UserWithSkills>, sqlx::Error> {
        let Some(user) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let skills = SkillRepo::list_for_user(pool, &user.id).await?;
        Ok(Some(UserWithSkills { user, skills }))
    }

    /// Insert a new user and return it with its (empty) skill list.
    pub async fn create_with_skills(
        pool: &PgPool,
        input: &CreateUser,
    ) -> Result<UserWithSkills, sqlx::Error> {
        let user = Self::create(pool, input).await?;
        let skills = SkillRepo::list_for_user(pool, &user.id).await?;
        Ok(UserWithSkills { user, skills })
    }

    /// Apply an onboarding profile update. Only non-`None` fields are written.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: &str,
        input: &UpdateUserProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                role_title = CASE WHEN $2 THEN $3 ELSE role_title END,
                experience = COALESCE($4, experience),
                dream_companies = COALESCE($5, dream_companies),
                career_goals = COALESCE($6, career_goals)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.role_title.is_some())
            .bind(input.role_title.clone().flatten())
            .bind(&input.experience)
            .bind(&input.dream_companies)
            .bind(&input.career_goals)
            .fetch_optional(pool)
            .await
    }

    /// Delete a user and, through the cascade, everything it owns.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
