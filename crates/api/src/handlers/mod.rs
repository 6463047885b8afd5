//! Request handlers.
//!
//! Handlers resolve the caller through the auth extractors, delegate to the
//! repositories in `proofboard_db`, and map errors via [`crate::error::AppError`].

pub mod user;
