//! Types, constants and helpers shared by every SocialX application.

pub mod constants;
pub mod dto;
pub mod errors;
pub mod models;
pub mod utils;

pub use dto::{ApiResponse, PaginatedResponse, PaginationMeta, PaginationParams};
pub use errors::UtilError;
pub use models::{Comment, Post, User};
pub use utils::{format_date, generate_id, parse_date, slugify, truncate_text};
