use async_trait::async_trait;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::Batch;

#[async_trait]
pub trait CreateBatchUseCase: Send + Sync {
    async fn execute(&self) -> Result<Batch, BatchError>;
}
