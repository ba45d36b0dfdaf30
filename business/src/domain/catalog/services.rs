use async_trait::async_trait;

use super::errors::SeedError;
use super::import::RawProductRecord;

/// Service port for reading the initial catalog the seed replaces the products with.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Vec<RawProductRecord>, SeedError>;
}
