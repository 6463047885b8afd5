//! Repository for the `submissions` table.

use proofboard_core::profile::SUBMISSION_COMPLETED;
use proofboard_core::stats::SubmissionTotals;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission, SubmissionWithProof};

const COLUMNS: &str =
    "id, user_id, proof_id, status, final_score, submitted_at, created_at, updated_at";

pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (user_id, proof_id, status, final_score, submitted_at)
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW()))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.user_id)
            .bind(input.proof_id)
            .bind(&input.status)
            .bind(input.final_score)
            .bind(input.submitted_at)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent submissions of a user, newest first, each
    /// joined with its proof summary.
    pub async fn list_recent_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<SubmissionWithProof>, sqlx::Error> {
        sqlx::query_as::<_, SubmissionWithProof>(
            "SELECT s.id, s.status, s.final_score, s.submitted_at,
                    p.title AS proof_title,
                    p.category AS proof_category,
                    p.difficulty AS proof_difficulty
             FROM submissions s
             JOIN proofs p ON p.id = s.proof_id
             WHERE s.user_id = $1
             ORDER BY s.submitted_at DESC, s.id DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Aggregate counters over all of a user's submissions.
    pub async fn totals_for_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<SubmissionTotals, sqlx::Error> {
        let (total, completed, score_sum, scored): (i64, i64, i64, i64) = sqlx::query_as(
            "SELECT
                COUNT(*),
                COUNT(*) FILTER (WHERE status = $2),
                COALESCE(SUM(final_score) FILTER (WHERE status = $2), 0)::BIGINT,
                COUNT(final_score) FILTER (WHERE status = $2)
             FROM submissions
             WHERE user_id = $1",
        )
        .bind(user_id)
        .bind(SUBMISSION_COMPLETED)
        .fetch_one(pool)
        .await?;

        Ok(SubmissionTotals {
            total,
            completed,
            score_sum,
            scored,
        })
    }
}
