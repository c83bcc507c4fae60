use std::sync::Arc;

use elegant_core::media::MediaUrlResolver;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: elegant_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Media key to public URL resolver, built from `config.media_base_url`.
    pub media: Arc<MediaUrlResolver>,
}
