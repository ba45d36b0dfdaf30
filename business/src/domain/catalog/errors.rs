#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed.source_unavailable")]
    SourceUnavailable,
    #[error("seed.source_invalid")]
    SourceInvalid,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
