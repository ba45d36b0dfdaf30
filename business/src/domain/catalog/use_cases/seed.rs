use async_trait::async_trait;

use crate::domain::catalog::errors::SeedError;
use crate::domain::catalog::import::SeedSummary;

#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedSummary, SeedError>;
}
