use reqwest::Url;

/// Forwards every request path under `source_prefix` to the same sub-path
/// under `destination`, keeping the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRule {
    source_prefix: String,
    destination: String,
}

impl RewriteRule {
    pub fn new(source_prefix: impl Into<String>, destination: impl Into<String>) -> Self {
        let source_prefix = source_prefix.into().trim_end_matches('/').to_string();
        let destination = destination.into().trim_end_matches('/').to_string();

        Self {
            source_prefix,
            destination,
        }
    }

    /// `/api/:path*` to `{api_url}/api/:path*`.
    pub fn api(api_url: &Url) -> Self {
        let origin = api_url.as_str().trim_end_matches('/');
        Self::new("/api", format!("{origin}/api"))
    }

    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.source_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Target URL for `path_and_query`, or `None` when the path is not covered.
    ///
    /// The target is resolved the way the HTTP client will send it, so dot
    /// segments (`..`, `%2e%2e`) are collapsed first. A target that resolves
    /// outside the destination's path prefix is not covered.
    pub fn apply(&self, path_and_query: &str) -> Option<Url> {
        let path = path_and_query.split('?').next().unwrap_or_default();
        if !self.matches(path) {
            return None;
        }

        let rest = &path_and_query[self.source_prefix.len()..];
        let base = Url::parse(&self.destination).ok()?;
        let target = Url::parse(&format!("{}{}", self.destination, rest)).ok()?;

        if target.origin() != base.origin() || !within_prefix(target.path(), base.path()) {
            return None;
        }
        Some(target)
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

fn within_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
