#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("pricing.invalid_price")]
    InvalidPrice,
    #[error("product.not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
