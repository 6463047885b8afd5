//! Repository for the `proofs` table.

use proofboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::proof::{CreateProof, Proof};

const COLUMNS: &str = "id, title, category, difficulty, created_at, updated_at";

pub struct ProofRepo;

impl ProofRepo {
    pub async fn create(pool: &PgPool, input: &CreateProof) -> Result<Proof, sqlx::Error> {
        let query = format!(
            "INSERT INTO proofs (title, category, difficulty)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Proof>(&query)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.difficulty)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Proof>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM proofs WHERE id = $1");
        sqlx::query_as::<_, Proof>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
