use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::query::{ProductPage, ProductQuery};

pub struct GetProductPageParams {
    pub query: ProductQuery,
}

#[async_trait]
pub trait GetProductPageUseCase: Send + Sync {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError>;
}
