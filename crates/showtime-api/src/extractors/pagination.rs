//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use showtime_core::types::pagination::{DEFAULT_LIMIT, PageRequest};

/// `?page=&limit=` on list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 10, max: 100).
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Converts to a normalized `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_bounds() {
        let req = PaginationParams::default().into_page_request();
        assert_eq!((req.page, req.limit), (1, 10));

        let req = PaginationParams {
            page: Some(0),
            limit: Some(1000),
        }
        .into_page_request();
        assert_eq!((req.page, req.limit), (1, 100));
    }
}
