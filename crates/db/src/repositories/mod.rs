//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod proof_repo;
pub mod skill_repo;
pub mod submission_repo;
pub mod user_repo;

pub use proof_repo::ProofRepo;
pub use skill_repo::SkillRepo;
pub use submission_repo::SubmissionRepo;
pub use user_repo::UserRepo;
