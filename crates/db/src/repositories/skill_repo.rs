//! Repository for the `user_skills` table.

use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill};

const COLUMNS: &str = "id, user_id, skill_name, category, current_level, confidence_score, \
                       proofs_completed, created_at, updated_at";

pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill for a user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_skills
                (user_id, skill_name, category, current_level, confidence_score, proofs_completed)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.user_id)
            .bind(&input.skill_name)
            .bind(&input.category)
            .bind(input.current_level)
            .bind(input.confidence_score)
            .bind(input.proofs_completed)
            .fetch_one(pool)
            .await
    }

    /// List a user's skills, strongest first, ties broken by name.
    pub async fn list_for_user(pool: &PgPool, user_id: &str) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_skills
             WHERE user_id = $1
             ORDER BY current_level DESC, skill_name ASC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
