//! Paginated response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pagination metadata returned with every paged response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    /// Current page number as reported by the API.
    #[serde(default)]
    pub page: i64,

    /// Number of records per page.
    pub per_page: i64,

    /// Total number of records across all pages.
    pub total: i64,
}

impl Pager {
    /// Returns the number of pages implied by `total` and `per_page`.
    ///
    /// A non-positive `per_page` is treated as a single page rather than a
    /// division by zero. A non-positive `total` means there are no pages.
    #[must_use]
    pub fn total_pages(&self) -> i64 {
        if self.total <= 0 {
            return 0;
        }
        if self.per_page <= 0 {
            return 1;
        }
        (self.total - 1) / self.per_page + 1
    }
}

/// One page of a paginated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Pagination metadata.
    pub pager: Pager,

    /// Records on this page.
    #[serde(default)]
    pub results: Vec<Value>,
}

impl Page {
    /// Decodes a page from a JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no `pager` or `results` is not an
    /// array.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn pager(total: i64, per_page: i64) -> Pager {
        Pager {
            page: 1,
            per_page,
            total,
        }
    }

    #[test]
    fn test_total_pages_exact() {
        assert_eq!(pager(100, 10).total_pages(), 10);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(pager(101, 10).total_pages(), 11);
        assert_eq!(pager(1, 50).total_pages(), 1);
    }

    #[test]
    fn test_total_pages_zero_per_page() {
        assert_eq!(pager(100, 0).total_pages(), 1);
        assert_eq!(pager(100, -5).total_pages(), 1);
    }

    #[test]
    fn test_total_pages_empty() {
        assert_eq!(pager(0, 10).total_pages(), 0);
    }

    #[test]
    fn test_page_from_value() {
        let page = Page::from_value(json!({
            "success": 1,
            "pager": { "page": 2, "per_page": 50, "total": 120 },
            "results": [{ "id": "1" }, { "id": "2" }]
        }))
        .unwrap();

        assert_eq!(page.pager.page, 2);
        assert_eq!(page.pager.total_pages(), 3);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_page_from_value_missing_pager() {
        let result = Page::from_value(json!({ "success": 0, "error": "TOKEN_INVALID" }));
        assert!(result.is_err());
    }
}
