use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub pagination: PageMeta,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Standard pagination query parameters for all list endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Get clamped limit (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Get clamped page (1-indexed)
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }
}

/// Pagination metadata returned alongside every list page.
///
/// Serialized camelCase: the mobile client reads
/// `meta.pagination.totalCount` / `hasNext` / `hasPrevious`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageMeta {
    pub fn new(page: i64, limit: i64, total_count: i64) -> Self {
        let page = page.max(1);
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        // An empty result set is still one (empty) page.
        let total_pages = if total_count == 0 {
            1
        } else {
            (total_count + limit - 1) / limit
        };
        Self {
            page,
            limit,
            total_count,
            total_pages,
            has_next: page * limit < total_count,
            has_previous: page > 1,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_empty_result_is_one_page() {
        let meta = PageMeta::new(1, 10, 0);
        assert_eq!(meta.total_count, 0);
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next);
        assert!(!meta.has_previous);
    }

    #[test]
    fn test_page_meta_total_pages_rounds_up() {
        assert_eq!(PageMeta::new(1, 10, 1).total_pages, 1);
        assert_eq!(PageMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PageMeta::new(1, 10, 11).total_pages, 2);
        assert_eq!(PageMeta::new(1, 5, 7).total_pages, 2);
    }

    #[test]
    fn test_page_meta_last_partial_page() {
        // 7 rows, page 2 of 5 -> two rows remain, no further page
        let meta = PageMeta::new(2, 5, 7);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);
        assert!(meta.has_previous);
    }

    #[test]
    fn test_page_meta_has_next_boundary() {
        assert!(PageMeta::new(1, 5, 7).has_next);
        assert!(!PageMeta::new(1, 5, 5).has_next);
        assert!(!PageMeta::new(2, 5, 10).has_next);
        assert!(PageMeta::new(2, 5, 11).has_next);
    }

    #[test]
    fn test_pagination_query_offset() {
        let q = PaginationQuery { page: 3, limit: 20 };
        assert_eq!(q.offset(), 40);
        assert_eq!(q.limit(), 20);

        // Out-of-range values are clamped rather than rejected
        let q = PaginationQuery {
            page: 0,
            limit: 1000,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.offset(), 0);
        assert_eq!(q.limit(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_page_meta_serializes_camel_case() {
        let meta = PageMeta::new(2, 5, 7);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["totalCount"], 7);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrevious"], true);
    }
}
