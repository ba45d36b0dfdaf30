use async_trait::async_trait;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::BatchFile;

#[async_trait]
pub trait GetAllBatchesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BatchFile>, BatchError>;
}
