/// Backend route paths used by clients.
///
/// `:id` marks a path parameter, see [`fill_route`].
pub mod api_routes {
    pub mod auth {
        pub const LOGIN: &str = "/auth/login";
        pub const REGISTER: &str = "/auth/register";
        pub const LOGOUT: &str = "/auth/logout";
        pub const REFRESH: &str = "/auth/refresh";
    }

    pub mod users {
        pub const PROFILE: &str = "/users/profile";
        pub const SEARCH: &str = "/users/search";
    }

    pub mod posts {
        pub const FEED: &str = "/posts";
        pub const CREATE: &str = "/posts";
        pub const LIKE: &str = "/posts/:id/like";
        pub const COMMENT: &str = "/posts/:id/comments";
    }
}

pub mod pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_LIMIT: u32 = 20;
    pub const MAX_LIMIT: u32 = 100;
}

pub mod validation {
    pub const USERNAME_MIN_LENGTH: u64 = 3;
    pub const USERNAME_MAX_LENGTH: u64 = 30;
    pub const PASSWORD_MIN_LENGTH: u64 = 8;
    pub const POST_MAX_LENGTH: u64 = 2000;
    pub const COMMENT_MAX_LENGTH: u64 = 500;
}

const ID_PLACEHOLDER: &str = ":id";

/// Substitutes the `:id` placeholder of a route template.
///
/// ```
/// use socialx_shared::constants::{api_routes, fill_route};
///
/// assert_eq!(fill_route(api_routes::posts::LIKE, "abc"), "/posts/abc/like");
/// assert_eq!(fill_route(api_routes::posts::FEED, "abc"), "/posts");
/// ```
pub fn fill_route(template: &str, id: &str) -> String {
    template.replace(ID_PLACEHOLDER, id)
}
