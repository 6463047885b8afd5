//! User entity model and DTOs.

use proofboard_core::types::{IdentityId, Timestamp};
use sqlx::FromRow;

use crate::models::skill::Skill;

/// Full user row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    /// Identity provider user ID.
    pub id: IdentityId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub dream_companies: String,
    pub career_goals: String,
    /// The user's current job role, if they filled it in during onboarding.
    pub role_title: Option<String>,
    pub experience: String,
    pub reputation: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A user together with all of its skills, fetched in one repository call.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithSkills {
    pub user: User,
    pub skills: Vec<Skill>,
}

/// DTO for inserting a user the first time an identity is seen.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: IdentityId,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
    pub dream_companies: String,
    pub career_goals: String,
}

/// DTO for the onboarding profile update. `None` leaves a field unchanged.
///
/// `role_title` is doubly optional: `Some(None)` clears the stored role.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserProfile {
    pub role_title: Option<Option<String>>,
    pub experience: Option<String>,
    pub dream_companies: Option<String>,
    pub career_goals: Option<String>,
}
