#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("batch.nothing_to_export")]
    NothingToExport,
    #[error("batch.not_found")]
    NotFound,
    #[error("batch.invalid_file_name")]
    InvalidFileName,
    #[error("batch.export_failed")]
    ExportFailed,
    #[error("batch.storage_failed")]
    StorageFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
