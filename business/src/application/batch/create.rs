use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::batch::errors::BatchError;
use crate::domain::batch::model::Batch;
use crate::domain::batch::services::BatchExporter;
use crate::domain::batch::use_cases::create::CreateBatchUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct CreateBatchUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub exporter: Arc<dyn BatchExporter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBatchUseCase for CreateBatchUseCaseImpl {
    async fn execute(&self) -> Result<Batch, BatchError> {
        let batch_id = Utc::now().timestamp_millis();
        let claim = self.repository.claim_approved(batch_id).await?;
        let products = claim.products().to_vec();

        if products.is_empty() {
            claim.rollback().await?;
            self.logger.warn("No approved products to export");
            return Err(BatchError::NothingToExport);
        }

        let batch = Batch::new(batch_id, products.len());
        self.logger.info(&format!(
            "Exporting {} approved products to {}",
            batch.count, batch.file_name
        ));

        if let Err(e) = self.exporter.write(&batch.file_name, &products).await {
            self.logger.error(&format!(
                "Could not write {}, products stay approved: {}",
                batch.file_name, e
            ));
            claim.rollback().await?;
            return Err(e);
        }

        if let Err(e) = claim.commit().await {
            self.logger.error(&format!("Batch {} was not committed: {}", batch.id, e));
            if self.exporter.remove(&batch.file_name).await.is_err() {
                self.logger.warn(&format!("Orphan export file left behind: {}", batch.file_name));
            }
            return Err(e.into());
        }

        self.logger.info(&format!("Batch {} exported", batch.id));
        Ok(batch)
    }
}
