/// Primary keys of collaborator tables (skills, proofs, submissions) are BIGSERIAL.
pub type DbId = i64;

/// Users are keyed by the opaque identity ID issued by the identity provider.
pub type IdentityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
