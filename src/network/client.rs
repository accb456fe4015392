//! HTTP client wrapper - fetches and decodes the amphibians listing

use std::time::Instant;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Amphibian;

/// Client for the amphibians endpoint
#[derive(Clone, Debug)]
pub struct AmphibianApi {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl AmphibianApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(AmphibianApi {
            client: create_client(config)?,
            endpoint: config.endpoint()?,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// GET `<base-url>/amphibians` and decode the JSON array
    pub async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError> {
        let start = Instant::now();
        tracing::debug!(url = %self.endpoint, "Requesting amphibians");

        let resp = self.client.get(self.endpoint.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Unexpected status");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        let amphibians: Vec<Amphibian> = serde_json::from_slice(&body)?;

        tracing::info!(
            status = status.as_u16(),
            count = amphibians.len(),
            bytes = body.len(),
            time_ms = start.elapsed().as_millis() as u64,
            "Amphibians received"
        );
        Ok(amphibians)
    }
}

/// Create an HTTP client from the given configuration
pub fn create_client(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resolves_endpoint() {
        let config = ApiConfig::default().with_base_url("http://127.0.0.1:9/");
        let api = AmphibianApi::new(&config).unwrap();
        assert_eq!(api.endpoint().as_str(), "http://127.0.0.1:9/amphibians");
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let config = ApiConfig::default().with_base_url("::");
        assert!(matches!(
            AmphibianApi::new(&config),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }
}
