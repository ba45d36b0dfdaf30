use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::BatchError;
use super::model::BatchFile;

/// Service port for export files: written once, then listed, read back or removed.
#[async_trait]
pub trait BatchExporter: Send + Sync {
    /// Creates `file_name`. An existing file with that name is never replaced.
    async fn write(&self, file_name: &str, products: &[Product]) -> Result<(), BatchError>;
    /// Export files, in no particular order. A missing export directory is empty.
    async fn list(&self) -> Result<Vec<BatchFile>, BatchError>;
    async fn read(&self, file_name: &str) -> Result<Vec<u8>, BatchError>;
    async fn remove(&self, file_name: &str) -> Result<(), BatchError>;
}
