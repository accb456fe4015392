//! Repository - the data source the view model depends on

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::Amphibian;
use crate::network::client::AmphibianApi;

/// Source of amphibian records
#[async_trait]
pub trait AmphibiansRepository: Send + Sync {
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError>;
}

/// Repository backed by the HTTP API
pub struct NetworkAmphibiansRepository {
    api: AmphibianApi,
}

impl NetworkAmphibiansRepository {
    pub fn new(api: AmphibianApi) -> Self {
        NetworkAmphibiansRepository { api }
    }
}

#[async_trait]
impl AmphibiansRepository for NetworkAmphibiansRepository {
    async fn get_amphibians(&self) -> Result<Vec<Amphibian>, ApiError> {
        self.api.get_amphibians().await
    }
}
