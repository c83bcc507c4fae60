//! Route definitions for the public `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/public/products`.
///
/// ```text
/// GET /          -> list
/// GET /{slug}    -> get_by_slug
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list))
        .route("/{slug}", get(products::get_by_slug))
}
