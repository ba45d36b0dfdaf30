use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::catalog::errors::SeedError;
use business::domain::catalog::import::RawProductRecord;
use business::domain::catalog::services::CatalogSource;

/// Reads the initial catalog from a JSON array of product records.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Result<Vec<RawProductRecord>, SeedError> {
        let content = tokio::fs::read(&self.path).await.map_err(|e| {
            tracing::error!("Could not read seed file {}: {}", self.path.display(), e);
            SeedError::SourceUnavailable
        })?;

        serde_json::from_slice(&content).map_err(|e| {
            tracing::error!("Seed file {} is not a product list: {}", self.path.display(), e);
            SeedError::SourceInvalid
        })
    }
}
