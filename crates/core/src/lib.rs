//! Domain types, errors, and pure rules shared by the database and API crates.

pub mod error;
pub mod identity;
pub mod profile;
pub mod stats;
pub mod types;
