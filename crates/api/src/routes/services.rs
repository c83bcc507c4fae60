//! Route definitions for the public `/services` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Routes mounted at `/public/services`.
///
/// ```text
/// GET /          -> list (static catalog)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(services::list))
}
