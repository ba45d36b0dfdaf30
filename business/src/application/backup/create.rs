use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::{Backup, backup_file_name};
use crate::domain::backup::services::BackupWriter;
use crate::domain::backup::use_cases::create::{CreateBackupParams, CreateBackupUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct CreateBackupUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub writer: Arc<dyn BackupWriter>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateBackupUseCase for CreateBackupUseCaseImpl {
    async fn execute(&self, params: CreateBackupParams) -> Result<Backup, BackupError> {
        let created_at = Utc::now();
        let file_name = backup_file_name(params.reason, created_at);
        self.logger.info(&format!("Creating backup: {}", file_name));

        let products = self.repository.get_all().await?;
        self.writer.write(&file_name, &products).await?;

        self.logger.info(&format!(
            "Backup {} written with {} products",
            file_name,
            products.len()
        ));
        Ok(Backup {
            file_name,
            product_count: products.len(),
            created_at,
        })
    }
}
