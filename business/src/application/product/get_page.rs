use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::query::ProductPage;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_page::{GetProductPageParams, GetProductPageUseCase};

pub struct GetProductPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductPageUseCase for GetProductPageUseCaseImpl {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError> {
        let query = params.query;
        self.logger.debug(&format!(
            "Fetching products page {} (limit {}, status {:?}, search {:?})",
            query.page, query.limit, query.status, query.search
        ));

        let page = self.repository.find_page(&query).await?;

        self.logger.debug(&format!(
            "Found {} of {} products",
            page.products.len(),
            page.total
        ));
        Ok(page)
    }
}
