//! Handlers for the `/user` resource (current user, profile document,
//! onboarding update).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use proofboard_core::error::CoreError;
use proofboard_core::profile::{
    normalize_current_role, normalize_profile_text, validate_experience,
    RECENT_SUBMISSIONS_LIMIT,
};
use proofboard_core::stats::DashboardStats;
use proofboard_core::types::{DbId, IdentityId, Timestamp};
use proofboard_db::models::skill::Skill;
use proofboard_db::models::submission::SubmissionWithProof;
use proofboard_db::models::user::{UpdateUserProfile, UserWithSkills};
use proofboard_db::repositories::{SkillRepo, SubmissionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /user/profile`. Omitted or `null` fields are left as is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// An empty string clears the stored role.
    pub current_role: Option<String>,
    pub experience: Option<String>,
    pub dream_companies: Option<String>,
    pub career_goals: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub id: DbId,
    pub skill_name: String,
    pub category: String,
    pub current_level: i16,
    pub confidence_score: i16,
    pub proofs_completed: i32,
}

impl From<Skill> for SkillResponse {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            skill_name: skill.skill_name,
            category: skill.category,
            current_level: skill.current_level,
            confidence_score: skill.confidence_score,
            proofs_completed: skill.proofs_completed,
        }
    }
}

/// User fields plus skills, as exposed to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: IdentityId,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub current_role: Option<String>,
    pub experience: String,
    pub dream_companies: String,
    pub career_goals: String,
    pub reputation: i32,
    pub skills: Vec<SkillResponse>,
}

impl From<UserWithSkills> for UserResponse {
    fn from(value: UserWithSkills) -> Self {
        let UserWithSkills { user, skills } = value;
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            current_role: user.role_title,
            experience: user.experience,
            dream_companies: user.dream_companies,
            career_goals: user.career_goals,
            reputation: user.reputation,
            skills: skills.into_iter().map(SkillResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProofSummary {
    pub title: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: DbId,
    pub status: String,
    pub final_score: Option<i16>,
    pub submitted_at: Timestamp,
    pub proof: ProofSummary,
}

impl From<SubmissionWithProof> for SubmissionResponse {
    fn from(row: SubmissionWithProof) -> Self {
        Self {
            id: row.id,
            status: row.status,
            final_score: row.final_score,
            submitted_at: row.submitted_at,
            proof: ProofSummary {
                title: row.proof_title,
                category: row.proof_category,
                difficulty: row.proof_difficulty,
            },
        }
    }
}

/// The aggregated document the dashboard renders.
#[derive(Debug, Serialize)]
pub struct ProfileDocument {
    #[serde(flatten)]
    pub user: UserResponse,
    pub submissions: Vec<SubmissionResponse>,
    pub stats: DashboardStats,
}

/// `{ "user": ... }` envelope of `GET /user/profile`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileDocument,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/user/me
///
/// The resolved caller with its skills. Provisions the user on first call.
pub async fn get_me(CurrentUser(me): CurrentUser) -> Json<DataResponse<UserResponse>> {
    Json(DataResponse { data: me.into() })
}

/// GET /api/v1/user/profile
///
/// Profile fields, skills, the most recent submissions and summary stats.
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(me): CurrentUser,
) -> AppResult<Json<ProfileResponse>> {
    let user_id = me.user.id.clone();

    let recent =
        SubmissionRepo::list_recent_for_user(&state.pool, &user_id, RECENT_SUBMISSIONS_LIMIT)
            .await?;
    let totals = SubmissionRepo::totals_for_user(&state.pool, &user_id).await?;

    let stats = DashboardStats::compute(me.user.reputation, me.skills.len() as i64, totals);

    Ok(Json(ProfileResponse {
        user: ProfileDocument {
            user: me.into(),
            submissions: recent.into_iter().map(SubmissionResponse::from).collect(),
            stats,
        },
    }))
}

/// PUT /api/v1/user/profile
///
/// Update the onboarding fields of the caller's profile.
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(me): CurrentUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let update = validate_update(input)?;

    let user = UserRepo::update_profile(&state.pool, &me.user.id, &update)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: me.user.id.clone(),
            })
        })?;
    let skills = SkillRepo::list_for_user(&state.pool, &user.id).await?;

    tracing::info!(user_id = %user.id, "Updated profile");

    Ok(Json(DataResponse {
        data: UserWithSkills { user, skills }.into(),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate and normalize an update request into the repository DTO.
fn validate_update(input: UpdateProfileRequest) -> Result<UpdateUserProfile, CoreError> {
    if let Some(experience) = input.experience.as_deref() {
        validate_experience(experience)?;
    }

    Ok(UpdateUserProfile {
        role_title: input
            .current_role
            .as_deref()
            .map(normalize_current_role)
            .transpose()?,
        experience: input.experience,
        dream_companies: input
            .dream_companies
            .as_deref()
            .map(|v| normalize_profile_text("dreamCompanies", v))
            .transpose()?,
        career_goals: input
            .career_goals
            .as_deref()
            .map(|v| normalize_profile_text("careerGoals", v))
            .transpose()?,
    })
}
