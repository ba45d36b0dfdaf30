use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::backup::model::Backup;

#[derive(Debug, Clone, Object)]
pub struct BackupResponse {
    pub file_name: String,
    /// Products in the snapshot
    pub product_count: usize,
    pub created_at: DateTime<Utc>,
}

impl From<Backup> for BackupResponse {
    fn from(backup: Backup) -> Self {
        Self {
            file_name: backup.file_name,
            product_count: backup.product_count,
            created_at: backup.created_at,
        }
    }
}
