use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Sku;

use super::model::Product;
use super::query::{ProductPage, ProductQuery};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_sku(&self, sku: &Sku) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Atomically replaces the whole catalog.
    async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
    /// Marks every currently approved product exported in `batch_id` and
    /// returns them, sorted by SKU, in a claim that is not yet committed.
    async fn claim_approved(&self, batch_id: i64) -> Result<Box<dyn ExportClaim>, RepositoryError>;
}

/// Products reserved for one export batch.
///
/// Other requests see the products as approved until `commit`. Concurrent
/// claims wait for this one to finish. Dropping a claim rolls it back.
#[async_trait]
pub trait ExportClaim: Send {
    fn products(&self) -> &[Product];
    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}
