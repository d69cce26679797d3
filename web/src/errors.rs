use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use socialx_shared::ApiResponse;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not Found")]
    NotFound,
    #[error("Too many requests")]
    TooManyRequests,
    #[error("Bad gateway: {0}")]
    BadGateway(String),
    #[error("Gateway timeout")]
    GatewayTimeout,
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Every error leaves as an `ApiResponse` envelope with `success: false`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::TooManyRequests => (StatusCode::TOO_MANY_REQUESTS, "Too many requests"),
            ApiError::BadGateway(msg) => {
                error!("Upstream request failed: {}", msg);
                (StatusCode::BAD_GATEWAY, "Bad gateway")
            }
            ApiError::GatewayTimeout => (StatusCode::GATEWAY_TIMEOUT, "Gateway timeout"),
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::GatewayTimeout
        } else {
            ApiError::BadGateway(err.to_string())
        }
    }
}
