//! Shared response envelope types for API handlers.
//!
//! All public endpoints use the storefront's `{ "success": ..., "data": ... }`
//! envelope. Use these types instead of ad-hoc `serde_json::json!` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Pagination metadata echoed back with every list response.
///
/// `limit` and `offset` are the effective (clamped) values, not the raw
/// query input; `total` is the filtered collection size regardless of the
/// pagination window.
#[derive(Debug, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// `{ success, data, meta }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, total: i64, limit: i64, offset: i64) -> Self {
        Self {
            success: true,
            data,
            meta: PageMeta {
                total,
                limit,
                offset,
            },
        }
    }
}

/// `{ success, data }` envelope for single-item endpoints.
#[derive(Debug, Serialize)]
pub struct ItemResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ItemResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ success, data, message }` envelope for creation endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: &'static str,
}

impl<T: Serialize> CreatedResponse<T> {
    pub fn new(data: T, message: &'static str) -> Self {
        Self {
            success: true,
            data,
            message,
        }
    }
}
