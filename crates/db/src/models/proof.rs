//! Proof (challenge) entity model and DTOs.

use proofboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `proofs` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Proof {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateProof {
    pub title: String,
    pub category: String,
    pub difficulty: String,
}
