use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ReviewChange;
use crate::domain::shared::value_objects::Sku;

pub struct ReviewProductParams {
    pub sku: Sku,
    pub change: ReviewChange,
}

#[async_trait]
pub trait ReviewProductUseCase: Send + Sync {
    async fn execute(&self, params: ReviewProductParams) -> Result<Product, ProductError>;
}
