use crate::constants::pagination::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}
fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Pages start at 1 and `limit` stays within `1..=MAX_LIMIT`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Zero-based index of the first item on the normalized page.
    pub fn offset(self) -> u64 {
        let p = self.normalized();
        u64::from(p.page - 1) * u64::from(p.limit)
    }
}
