//! Handlers for the public `/blog` (journal) resource.

use axum::extract::{Path, Query, State};
use axum::Json;

use elegant_core::error::CoreError;
use elegant_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use elegant_db::models::blog_post::PublicBlogPost;
use elegant_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::{ItemResponse, ListResponse};
use crate::state::AppState;

/// GET /api/public/blog
///
/// List published posts, newest publication first. No entity filters --
/// the journal is browsed whole and paginated.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ListResponse<PublicBlogPost>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let total = BlogPostRepo::count_published(&state.pool).await?;
    let rows = BlogPostRepo::list_published(&state.pool, limit, offset).await?;

    let data = rows
        .into_iter()
        .map(|row| PublicBlogPost::from_row(row, &state.media))
        .collect();

    Ok(Json(ListResponse::new(data, total, limit, offset)))
}

/// GET /api/public/blog/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ItemResponse<PublicBlogPost>>> {
    let row = BlogPostRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Blog post",
            slug,
        }))?;

    Ok(Json(ItemResponse::new(PublicBlogPost::from_row(
        row,
        &state.media,
    ))))
}
