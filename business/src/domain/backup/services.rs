use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::BackupError;

/// Service port for persisting catalog snapshots outside the database.
#[async_trait]
pub trait BackupWriter: Send + Sync {
    async fn write(&self, file_name: &str, products: &[Product]) -> Result<(), BackupError>;
}
