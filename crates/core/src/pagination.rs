//! Pagination constants and helpers shared by all public list endpoints.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API layer (to echo the effective window in `meta`) and the
//! repository layer.

/// Default number of records per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of records per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Slice a fully materialized collection to the `[offset, offset + limit)`
/// window.
///
/// Used by the static services catalog, which is filtered and paginated in
/// memory rather than in SQL. Out-of-range windows yield an empty slice,
/// never a panic. Callers clamp `limit` and `offset` first.
pub fn paginate<T>(items: &[T], limit: i64, offset: i64) -> &[T] {
    let start = (offset as usize).min(items.len());
    let end = start.saturating_add(limit as usize).min(items.len());
    &items[start..end]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_limit ---------------------------------------------------------

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 50);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(-5), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
        assert_eq!(clamp_limit(Some(0), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 1);
    }

    #[test]
    fn clamp_limit_passes_through_valid_value() {
        assert_eq!(clamp_limit(Some(25), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT), 25);
    }

    // -- clamp_offset --------------------------------------------------------

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(Some(-10)), 0);
    }

    #[test]
    fn clamp_offset_passes_through_valid_value() {
        assert_eq!(clamp_offset(Some(40)), 40);
    }

    // -- paginate ------------------------------------------------------------

    #[test]
    fn paginate_returns_window() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(paginate(&items, 2, 1), &[2, 3]);
    }

    #[test]
    fn paginate_truncates_at_end() {
        let items = vec![1, 2, 3];
        assert_eq!(paginate(&items, 10, 2), &[3]);
    }

    #[test]
    fn paginate_offset_past_end_is_empty() {
        let items = vec![1, 2, 3];
        assert!(paginate(&items, 10, 50).is_empty());
    }

    #[test]
    fn paginate_window_size_never_exceeds_limit() {
        let items: Vec<i32> = (0..200).collect();
        assert_eq!(paginate(&items, 100, 0).len(), 100);
    }
}
