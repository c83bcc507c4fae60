//! Shared query parameter types for API handlers.
//!
//! Boolean filters arrive as string flags: the storefront sends
//! `?featured=true`, and only that literal value switches a filter on.
//! Everything else (absent, `false`, junk) leaves the filter off, so the
//! params structs keep those fields as `Option<String>` and convert via
//! [`true_flag`].

use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Used directly by list endpoints without entity-specific filters. Values
/// are clamped in the handlers via `elegant_core::pagination`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for the public products listing.
#[derive(Debug, Deserialize)]
pub struct ProductListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
    pub featured: Option<String>,
    pub in_stock: Option<String>,
}

/// Query parameters for the public projects listing.
#[derive(Debug, Deserialize)]
pub struct ProjectListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub featured: Option<String>,
}

/// Query parameters for the services listing.
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category: Option<String>,
    pub featured: Option<String>,
}

/// Interpret a boolean query flag the way the storefront sends it.
pub fn true_flag(value: Option<&str>) -> Option<bool> {
    (value == Some("true")).then_some(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
