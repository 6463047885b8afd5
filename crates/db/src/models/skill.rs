//! Skill entity model and DTOs.

use proofboard_core::types::{DbId, IdentityId, Timestamp};
use sqlx::FromRow;

/// A row from the `user_skills` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Skill {
    pub id: DbId,
    pub user_id: IdentityId,
    pub skill_name: String,
    pub category: String,
    /// 0..=10
    pub current_level: i16,
    /// 0..=100
    pub confidence_score: i16,
    pub proofs_completed: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone)]
pub struct CreateSkill {
    pub user_id: IdentityId,
    pub skill_name: String,
    pub category: String,
    pub current_level: i16,
    pub confidence_score: i16,
    pub proofs_completed: i32,
}
