use crate::{config::Config, rewrite::RewriteRule};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::{Client, redirect::Policy};
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler. The HTTP client pools upstream connections and
/// the limiter is shared by every `/api` request.
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub rewrite: Arc<RewriteRule>,
    pub limiter: Arc<DefaultDirectRateLimiter>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        // Upstream redirects are passed through to the client untouched.
        let client = Client::builder()
            .timeout(config.proxy_timeout)
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            client,
            rewrite: Arc::new(RewriteRule::api(&config.api_url)),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(
                config.rate_limit_per_second,
            ))),
        })
    }
}
