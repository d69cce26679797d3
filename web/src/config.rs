use reqwest::Url;
use std::{
    fmt::Display,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::{NonZeroU32, NonZeroU64, NonZeroUsize},
    str::FromStr,
    time::Duration,
};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

const DEFAULT_PROXY_TIMEOUT_SECS: NonZeroU64 = NonZeroU64::new(30).unwrap();
const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
const DEFAULT_RATE_LIMIT_PER_SECOND: NonZeroU32 = NonZeroU32::new(100).unwrap();
const DEFAULT_CONCURRENCY_LIMIT: NonZeroUsize = NonZeroUsize::new(256).unwrap();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} has invalid value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin that `/api/*` is rewritten to.
    pub api_url: Url,
    pub bind_addr: SocketAddr,
    pub proxy_timeout: Duration,
    pub max_body_bytes: usize,
    pub rate_limit_per_second: NonZeroU32,
    pub concurrency_limit: NonZeroUsize,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_url = parse_api_url(
            "NEXT_PUBLIC_API_URL",
            &var("NEXT_PUBLIC_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        )?;
        let bind_addr = parse_or("BIND_ADDR", var("BIND_ADDR"), DEFAULT_BIND_ADDR)?;
        let proxy_timeout = parse_or(
            "PROXY_TIMEOUT_SECS",
            var("PROXY_TIMEOUT_SECS"),
            DEFAULT_PROXY_TIMEOUT_SECS,
        )?;
        let max_body_bytes = parse_or("MAX_BODY_BYTES", var("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?;
        let rate_limit_per_second = parse_or(
            "RATE_LIMIT_PER_SECOND",
            var("RATE_LIMIT_PER_SECOND"),
            DEFAULT_RATE_LIMIT_PER_SECOND,
        )?;
        let concurrency_limit = parse_or(
            "CONCURRENCY_LIMIT",
            var("CONCURRENCY_LIMIT"),
            DEFAULT_CONCURRENCY_LIMIT,
        )?;

        Ok(Self {
            api_url,
            bind_addr,
            proxy_timeout: Duration::from_secs(proxy_timeout.get()),
            max_body_bytes,
            rate_limit_per_second,
            concurrency_limit,
        })
    }
}

fn parse_api_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
    };

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }

    Ok(url)
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.api_url.as_str(), "http://localhost:4000/");
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.proxy_timeout, Duration::from_secs(30));
        assert_eq!(config.max_body_bytes, 2 * 1024 * 1024);
        assert_eq!(config.rate_limit_per_second.get(), 100);
        assert_eq!(config.concurrency_limit.get(), 256);
    }

    #[test]
    fn empty_api_url_falls_back_to_default() {
        let config = config_from(&[("NEXT_PUBLIC_API_URL", "")]).unwrap();
        assert_eq!(config.api_url.as_str(), "http://localhost:4000/");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("NEXT_PUBLIC_API_URL", "https://api.socialx.dev/v2"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("PROXY_TIMEOUT_SECS", "5"),
            ("RATE_LIMIT_PER_SECOND", " 7 "),
        ])
        .unwrap();

        assert_eq!(config.api_url.as_str(), "https://api.socialx.dev/v2");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.proxy_timeout, Duration::from_secs(5));
        assert_eq!(config.rate_limit_per_second.get(), 7);
    }

    #[test]
    fn rejects_non_http_api_url() {
        for bad in ["ftp://files.example", "localhost:4000", "http://host/?q=1"] {
            let err = config_from(&[("NEXT_PUBLIC_API_URL", bad)]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{bad}");
        }
    }

    #[test]
    fn rejects_zero_and_garbage_numbers() {
        let err = config_from(&[("PROXY_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("PROXY_TIMEOUT_SECS"));

        let err = config_from(&[("CONCURRENCY_LIMIT", "lots")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "CONCURRENCY_LIMIT", .. }
        ));
    }
}
