#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("backup.write_failed")]
    WriteFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
