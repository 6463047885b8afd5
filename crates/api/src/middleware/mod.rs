//! Authentication extractors.
//!
//! - [`auth::SessionContext`] -- the request's (possibly anonymous) auth context.
//! - [`auth::CurrentUser`] -- the resolved user; rejects with 401 otherwise.

pub mod auth;
