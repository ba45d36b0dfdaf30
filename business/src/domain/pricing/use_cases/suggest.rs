use async_trait::async_trait;

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::PriceSuggestion;
use crate::domain::shared::value_objects::Sku;

pub struct SuggestForPriceParams {
    pub current_price: f64,
}

pub struct SuggestForProductParams {
    pub sku: Sku,
}

#[async_trait]
pub trait SuggestPricesUseCase: Send + Sync {
    async fn execute_for_price(
        &self,
        params: SuggestForPriceParams,
    ) -> Result<PriceSuggestion, PricingError>;

    async fn execute_for_product(
        &self,
        params: SuggestForProductParams,
    ) -> Result<PriceSuggestion, PricingError>;
}
