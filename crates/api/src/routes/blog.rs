//! Route definitions for the public `/blog` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Routes mounted at `/public/blog`.
///
/// ```text
/// GET /          -> list
/// GET /{slug}    -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list))
        .route("/{slug}", get(blog::get_by_slug))
}
