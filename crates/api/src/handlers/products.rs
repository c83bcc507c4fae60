//! Handlers for the public `/products` resource.

use axum::extract::{Path, Query, State};
use axum::Json;

use elegant_core::error::CoreError;
use elegant_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use elegant_db::models::product::PublicProduct;
use elegant_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::query::{true_flag, ProductListParams};
use crate::response::{ItemResponse, ListResponse};
use crate::state::AppState;

/// GET /api/public/products
///
/// List published products with pagination and optional `category`,
/// `featured=true`, and `in_stock=true` filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<Json<ListResponse<PublicProduct>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let category = params.category.as_deref();
    let featured = true_flag(params.featured.as_deref());
    let in_stock = true_flag(params.in_stock.as_deref());

    let total = ProductRepo::count_published(&state.pool, category, featured, in_stock).await?;
    let rows =
        ProductRepo::list_published(&state.pool, category, featured, in_stock, limit, offset)
            .await?;

    let data = rows
        .into_iter()
        .map(|row| PublicProduct::from_row(row, &state.media))
        .collect();

    Ok(Json(ListResponse::new(data, total, limit, offset)))
}

/// GET /api/public/products/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ItemResponse<PublicProduct>>> {
    let row = ProductRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            slug,
        }))?;

    Ok(Json(ItemResponse::new(PublicProduct::from_row(
        row,
        &state.media,
    ))))
}
