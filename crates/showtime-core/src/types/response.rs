//! Response envelopes for API endpoints.

use serde::{Deserialize, Serialize};

use super::pagination::PageResponse;

/// Standard `{success, message, data}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Response<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Response<()> {
    /// Success without a payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// The `{success: false, message}` error envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// List envelope: `{success, message, data, page, limit, total, pages}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn ok(message: impl Into<String>, page: PageResponse<T>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: page.items,
            page: page.page,
            limit: page.limit,
            total: page.total,
            pages: page.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pagination::PageRequest;

    #[test]
    fn error_envelope_has_no_data_field() {
        let json = serde_json::to_value(Response::error("Role not found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Role not found");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn paginated_envelope_shape() {
        let page = PageResponse::new(vec!["a", "b"], &PageRequest::new(2, 2), 5);
        let json = serde_json::to_value(PaginatedResponse::ok("Genres retrieved", page)).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["total"], 5);
        assert_eq!(json["pages"], 3);
    }
}
