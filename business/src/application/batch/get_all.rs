use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::BatchFile;
use crate::domain::batch::services::BatchExporter;
use crate::domain::batch::use_cases::get_all::GetAllBatchesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllBatchesUseCaseImpl {
    pub exporter: Arc<dyn BatchExporter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllBatchesUseCase for GetAllBatchesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<BatchFile>, BatchError> {
        let mut files = self.exporter.list().await?;
        // Newest first
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        self.logger.debug(&format!("Found {} export files", files.len()));
        Ok(files)
    }
}
