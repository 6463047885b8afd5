pub mod health;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/me                                         current user (requires auth)
/// /user/profile                                    get, update (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/user", user::router())
}
