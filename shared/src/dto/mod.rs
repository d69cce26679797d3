mod requests;
mod responses;

pub use requests::PaginationParams;
pub use responses::{ApiResponse, PaginatedResponse, PaginationMeta};
