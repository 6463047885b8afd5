//! Authentication primitives.
//!
//! - [`session`] -- verification of provider-issued session tokens.
//! - [`provider`] -- REST client for the identity provider's user API.
//! - [`resolver`] -- resolves (and on first login provisions) the calling user.

pub mod provider;
pub mod resolver;
pub mod session;
