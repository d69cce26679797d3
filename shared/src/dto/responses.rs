use super::PaginationParams;
use serde::{Deserialize, Serialize};

/// Envelope wrapped around every JSON body exchanged with the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(flatten)]
    pub response: ApiResponse<Vec<T>>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// `items` is the already-sliced page; `total` counts every matching item.
    pub fn new(items: Vec<T>, params: PaginationParams, total: u64) -> Self {
        let params = params.normalized();

        Self {
            response: ApiResponse::ok(items),
            pagination: PaginationMeta {
                page: params.page,
                limit: params.limit,
                total,
                total_pages: total.div_ceil(u64::from(params.limit)),
            },
        }
    }
}
