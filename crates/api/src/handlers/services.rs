//! Handlers for the public `/services` resource.

use axum::extract::Query;
use axum::Json;

use elegant_core::pagination::{
    clamp_limit, clamp_offset, paginate, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use elegant_core::services::{self, Service};

use crate::error::AppResult;
use crate::query::{true_flag, ServiceListParams};
use crate::response::ListResponse;

/// GET /api/public/services
///
/// The services catalog is static (`elegant_core::services`), so filtering
/// and pagination happen in memory: filter, count, then slice. The catalog
/// is rebuilt on every request.
pub async fn list(
    Query(params): Query<ServiceListParams>,
) -> AppResult<Json<ListResponse<Service>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);
    let category = params.category.as_deref();
    let featured = true_flag(params.featured.as_deref());

    let filtered = services::filter(services::catalog(), category, featured);
    let total = filtered.len() as i64;
    let data = paginate(&filtered, limit, offset).to_vec();

    Ok(Json(ListResponse::new(data, total, limit, offset)))
}
