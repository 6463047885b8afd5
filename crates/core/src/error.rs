/// Domain errors shared by the resolver, the profile rules and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is a provider identity ID or a stringified row ID.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// A profile field failed validation (unknown experience level, oversized text).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The caller could not be resolved to a user.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
