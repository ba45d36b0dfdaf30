#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.sku_empty")]
    SkuEmpty,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.negative_stock")]
    NegativeStock,
    #[error("product.not_found")]
    NotFound,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.approval_requires_price")]
    ApprovalRequiresPrice,
    #[error("product.status_not_assignable")]
    StatusNotAssignable,
    #[error("product.already_exported")]
    AlreadyExported,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
