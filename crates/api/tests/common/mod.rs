//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router via `tower::ServiceExt` without a TCP
//! listener. Seeding goes through raw SQL because public endpoints are
//! read-only -- content is written by a separate admin service in
//! production.

#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use elegant_api::config::ServerConfig;
use elegant_api::routes;
use elegant_api::state::AppState;
use elegant_core::media::MediaUrlResolver;

/// Media base URL used by every test app; URL assertions depend on it.
pub const TEST_MEDIA_BASE: &str = "https://media.example.com";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        media_base_url: TEST_MEDIA_BASE.to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let media = Arc::new(MediaUrlResolver::new(config.media_base_url.clone()));

    let state = AppState {
        pool,
        config: Arc::new(config),
        media,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a product row with the given catalog flags.
pub async fn seed_product(
    pool: &PgPool,
    slug: &str,
    category: &str,
    featured: bool,
    in_stock: bool,
    published: bool,
) {
    sqlx::query(
        "INSERT INTO products (name, title, slug, category, featured, in_stock, published)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(format!("{slug} name"))
    .bind(format!("{slug} title"))
    .bind(slug)
    .bind(category)
    .bind(featured)
    .bind(in_stock)
    .bind(published)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a published product row with media keys.
pub async fn seed_product_with_images(
    pool: &PgPool,
    slug: &str,
    featured_image: Option<&str>,
    images: &[&str],
) {
    let images: Vec<String> = images.iter().map(|s| s.to_string()).collect();
    sqlx::query(
        "INSERT INTO products (name, slug, category, featured_image, images, published)
         VALUES ($1, $2, 'tiles', $3, $4, TRUE)",
    )
    .bind(format!("{slug} name"))
    .bind(slug)
    .bind(featured_image)
    .bind(images)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a project row.
pub async fn seed_project(pool: &PgPool, slug: &str, featured: bool, published: bool) {
    sqlx::query(
        "INSERT INTO projects (title, slug, featured, published)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(format!("{slug} title"))
    .bind(slug)
    .bind(featured)
    .bind(published)
    .execute(pool)
    .await
    .unwrap();
}

/// Insert a blog post row.
pub async fn seed_blog_post(
    pool: &PgPool,
    slug: &str,
    published: bool,
    featured_image: Option<&str>,
) {
    sqlx::query(
        "INSERT INTO blog_posts (title, slug, content, published, published_at, featured_image)
         VALUES ($1, $2, 'body text', $3, NOW(), $4)",
    )
    .bind(format!("{slug} title"))
    .bind(slug)
    .bind(published)
    .bind(featured_image)
    .execute(pool)
    .await
    .unwrap();
}
