//! Handlers for the public `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;

use elegant_core::error::CoreError;
use elegant_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use elegant_db::models::project::PublicProject;
use elegant_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::query::{true_flag, ProjectListParams};
use crate::response::{ItemResponse, ListResponse};
use crate::state::AppState;

/// GET /api/public/projects
///
/// List published projects with pagination and an optional `featured=true`
/// filter.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<ListResponse<PublicProject>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let featured = true_flag(params.featured.as_deref());

    let total = ProjectRepo::count_published(&state.pool, featured).await?;
    let rows = ProjectRepo::list_published(&state.pool, featured, limit, offset).await?;

    let data = rows
        .into_iter()
        .map(|row| PublicProject::from_row(row, &state.media))
        .collect();

    Ok(Json(ListResponse::new(data, total, limit, offset)))
}

/// GET /api/public/projects/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ItemResponse<PublicProject>>> {
    let row = ProjectRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            slug,
        }))?;

    Ok(Json(ItemResponse::new(PublicProject::from_row(
        row,
        &state.media,
    ))))
}
