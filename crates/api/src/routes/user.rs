use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /me         resolved caller with skills
/// GET  /profile    aggregated dashboard document
/// PUT  /profile    onboarding field update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(user::get_me))
        .route("/profile", get(user::get_profile).put(user::update_profile))
}
