use crate::domain::errors::{DomainError, DomainResult};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.pushinpay.com.br";

/// Pushin Pay client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushinPayConfig {
    /// API base URL
    pub base_url: Url,

    /// Per-request timeout applied to the HTTP client built from this config
    pub timeout: Option<Duration>,
}

impl PushinPayConfig {
    /// Production host, no timeout
    pub fn production() -> DomainResult<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn new(base_url: &str) -> DomainResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::ConfigurationError(format!("Invalid base URL {}: {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::ConfigurationError(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            base_url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads `PUSHIN_PAY_BASE_URL` and `PUSHIN_PAY_TIMEOUT_SECS`; both optional.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = match lookup("PUSHIN_PAY_BASE_URL") {
            Some(url) => Self::new(&url)?,
            None => Self::production()?,
        };

        if let Some(raw) = lookup("PUSHIN_PAY_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                DomainError::ConfigurationError(format!(
                    "PUSHIN_PAY_TIMEOUT_SECS must be a whole number of seconds, got {}",
                    raw
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
