//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and the create/update DTOs its repository accepts.

pub mod proof;
pub mod skill;
pub mod submission;
pub mod user;
