//! API client configuration
//!
//! Everything is set in code; there are no config files or environment
//! variables. Tests point `base_url` at a local mock server.

use std::time::Duration;

use crate::constants::{AMPHIBIANS_PATH, BASE_URL, DEFAULT_TIMEOUT};
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: String::from(BASE_URL),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the amphibians listing
    pub fn endpoint(&self) -> Result<reqwest::Url, ApiError> {
        let invalid = |reason: String| ApiError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        // `Url::join` replaces the last segment unless the base ends in '/'
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = reqwest::Url::parse(&base).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid(String::from("URL cannot be a base")));
        }
        base.join(AMPHIBIANS_PATH).map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let url = ApiConfig::default().endpoint().unwrap();
        assert_eq!(
            url.as_str(),
            "https://android-kotlin-fun-mars-server.appspot.com/amphibians"
        );
    }

    #[test]
    fn test_base_without_trailing_slash_keeps_path() {
        let config = ApiConfig::default().with_base_url("http://localhost:8080/api");
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:8080/api/amphibians"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiConfig::default()
            .with_base_url("not a url")
            .endpoint()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_with_timeout() {
        let config = ApiConfig::default().with_timeout(Duration::from_millis(250));
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.base_url, BASE_URL);
    }
}
