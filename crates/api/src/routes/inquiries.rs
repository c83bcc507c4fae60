//! Route definitions for the `/inquiries` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::inquiries;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// POST /         -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(inquiries::create))
}
