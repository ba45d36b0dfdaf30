use async_trait::async_trait;

use crate::domain::backup::errors::BackupError;
use crate::domain::backup::model::{Backup, BackupReason};

pub struct CreateBackupParams {
    pub reason: BackupReason,
}

#[async_trait]
pub trait CreateBackupUseCase: Send + Sync {
    async fn execute(&self, params: CreateBackupParams) -> Result<Backup, BackupError>;
}
