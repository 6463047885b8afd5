//! Submission entity model and DTOs.

use proofboard_core::types::{DbId, IdentityId, Timestamp};
use sqlx::FromRow;

/// A row from the `submissions` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Submission {
    pub id: DbId,
    pub user_id: IdentityId,
    pub proof_id: DbId,
    pub status: String,
    pub final_score: Option<i16>,
    pub submitted_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A submission joined with the summary of the proof it answers.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SubmissionWithProof {
    pub id: DbId,
    pub status: String,
    pub final_score: Option<i16>,
    pub submitted_at: Timestamp,
    pub proof_title: String,
    pub proof_category: String,
    pub proof_difficulty: String,
}

/// DTO for creating a submission. `submitted_at` defaults to now.
#[derive(Debug, Clone)]
pub struct CreateSubmission {
    pub user_id: IdentityId,
    pub proof_id: DbId,
    pub status: String,
    pub final_score: Option<i16>,
    pub submitted_at: Option<Timestamp>,
}
