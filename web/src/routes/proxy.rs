use crate::{AppState, errors::ApiError};
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, header},
    response::Response,
};
use socialx_shared::{generate_id, truncate_text};
use tracing::{info, warn};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");
pub const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

const LOGGED_BODY_CHARS: usize = 200;

/// Connection-scoped headers. Headers named in `Connection` are dropped too.
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Fallback for every path without a page of its own.
///
/// Paths covered by the rewrite rule go to the backend; the rest are 404.
pub async fn rewrite(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let target = state
        .rewrite
        .apply(path_and_query)
        .ok_or(ApiError::NotFound)?;

    if state.limiter.check().is_err() {
        warn!("Rate limit exceeded for {} {}", method, path_and_query);
        return Err(ApiError::TooManyRequests);
    }

    let mut outbound = strip_hop_by_hop(&headers);
    outbound.remove(header::HOST);
    outbound.remove(header::CONTENT_LENGTH);
    if let Some(host) = headers.get(header::HOST) {
        outbound.insert(X_FORWARDED_HOST, host.clone());
    }
    if !outbound.contains_key(X_REQUEST_ID) {
        let id = HeaderValue::from_str(&generate_id())
            .map_err(|e| ApiError::InternalError(format!("Invalid request id: {}", e)))?;
        outbound.insert(X_REQUEST_ID, id);
    }

    info!("Proxying {} {} -> {}", method, path_and_query, target);

    let is_head = method == Method::HEAD;
    let upstream = state
        .client
        .request(method, target.clone())
        .headers(outbound)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut response_headers = strip_hop_by_hop(upstream.headers());
    // The relayed body is re-framed, except for HEAD where the upstream
    // length describes a body that is never sent.
    if !is_head {
        response_headers.remove(header::CONTENT_LENGTH);
    }
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        warn!(
            "Upstream {} answered {}: {}",
            target,
            status,
            truncate_text(&String::from_utf8_lossy(&bytes), LOGGED_BODY_CHARS)
        );
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let mut kept = headers.clone();

    let named: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();
    for name in &named {
        kept.remove(name);
    }

    for name in &HOP_BY_HOP {
        kept.remove(name);
    }
    kept
}
