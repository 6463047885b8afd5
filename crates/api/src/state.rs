use std::sync::Arc;

use proofboard_core::identity::IdentityProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: proofboard_db::DbPool,
    /// Server configuration (session verification reads `identity`).
    pub config: Arc<ServerConfig>,
    /// Identity provider used to resolve and provision callers.
    pub identity: Arc<dyn IdentityProvider>,
}
