use async_trait::async_trait;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::BatchDownload;

pub struct DownloadBatchParams {
    pub file_name: String,
}

#[async_trait]
pub trait DownloadBatchUseCase: Send + Sync {
    async fn execute(&self, params: DownloadBatchParams) -> Result<BatchDownload, BatchError>;
}
