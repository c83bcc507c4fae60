pub mod blog;
pub mod health;
pub mod inquiries;
pub mod products;
pub mod projects;
pub mod services;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET  /public/products            list (limit, offset, category, featured, in_stock)
/// GET  /public/products/{slug}     single product
/// GET  /public/projects            list (limit, offset, featured)
/// GET  /public/projects/{slug}     single project
/// GET  /public/blog                list (limit, offset)
/// GET  /public/blog/{slug}         single post
/// GET  /public/services            static catalog (limit, offset, category, featured)
/// POST /inquiries                  create contact-form inquiry
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/public/products", products::router())
        .nest("/public/projects", projects::router())
        .nest("/public/blog", blog::router())
        .nest("/public/services", services::router())
        .nest("/inquiries", inquiries::router())
}
