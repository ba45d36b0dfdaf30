use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::{BatchDownload, is_batch_file, safe_file_name};
use crate::domain::batch::services::BatchExporter;
use crate::domain::batch::use_cases::download::{DownloadBatchParams, DownloadBatchUseCase};
use crate::domain::logger::Logger;

pub struct DownloadBatchUseCaseImpl {
    pub exporter: Arc<dyn BatchExporter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DownloadBatchUseCase for DownloadBatchUseCaseImpl {
    async fn execute(&self, params: DownloadBatchParams) -> Result<BatchDownload, BatchError> {
        let file_name =
            safe_file_name(&params.file_name).ok_or(BatchError::InvalidFileName)?;

        if !is_batch_file(&file_name) {
            return Err(BatchError::NotFound);
        }

        let content = self.exporter.read(&file_name).await?;

        self.logger.info(&format!(
            "Serving export file {} ({} bytes)",
            file_name,
            content.len()
        ));
        Ok(BatchDownload { file_name, content })
    }
}
