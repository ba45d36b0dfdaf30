use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{PriceSuggestion, compute_suggestions};
use crate::domain::pricing::use_cases::suggest::{
    SuggestForPriceParams, SuggestForProductParams, SuggestPricesUseCase,
};
use crate::domain::product::repository::ProductRepository;

pub struct SuggestPricesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestPricesUseCase for SuggestPricesUseCaseImpl {
    async fn execute_for_price(
        &self,
        params: SuggestForPriceParams,
    ) -> Result<PriceSuggestion, PricingError> {
        let suggestion = compute_suggestions(params.current_price).inspect_err(|_| {
            self.logger.warn(&format!(
                "Rejected price for suggestions: {}",
                params.current_price
            ))
        })?;

        self.logger.debug(&format!(
            "Suggested {:?} for {} ({} bracket)",
            suggestion.prices, suggestion.current_price, suggestion.bracket
        ));
        Ok(suggestion)
    }

    async fn execute_for_product(
        &self,
        params: SuggestForProductParams,
    ) -> Result<PriceSuggestion, PricingError> {
        let product = self
            .repository
            .get_by_sku(&params.sku)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PricingError::ProductNotFound,
                other => PricingError::Repository(other),
            })?;

        let suggestion = product.price_suggestions().inspect_err(|_| {
            self.logger.warn(&format!(
                "Product {} has no usable price: {}",
                product.sku, product.current_price
            ))
        })?;

        self.logger.debug(&format!(
            "Suggested {:?} for product {}",
            suggestion.prices, product.sku
        ));
        Ok(suggestion)
    }
}
