use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::pricing::use_cases::suggest::{
    SuggestForPriceParams, SuggestForProductParams, SuggestPricesUseCase,
};
use business::domain::shared::value_objects::Sku;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pricing::dto::PriceSuggestionResponse;
use crate::api::tags::ApiTags;

pub struct PricingApi {
    suggest_use_case: Arc<dyn SuggestPricesUseCase>,
}

impl PricingApi {
    pub fn new(suggest_use_case: Arc<dyn SuggestPricesUseCase>) -> Self {
        Self { suggest_use_case }
    }
}

/// Price suggestion API
#[OpenApi]
impl PricingApi {
    /// Suggest prices for a given price
    ///
    /// Applies the markup and the bracket rounding rules to `current_price`.
    #[oai(path = "/pricing/suggestions", method = "get", tag = "ApiTags::Pricing")]
    async fn suggest_for_price(
        &self,
        /// Current shelf price, must be greater than zero
        current_price: Query<f64>,
    ) -> SuggestPricesResponse {
        let params = SuggestForPriceParams {
            current_price: current_price.0,
        };

        match self.suggest_use_case.execute_for_price(params).await {
            Ok(suggestion) => SuggestPricesResponse::Ok(Json(suggestion.into())),
            Err(err) => SuggestPricesResponse::from_error(err.into_error_response()),
        }
    }

    /// Suggest prices for a product
    ///
    /// Uses the stored current price of the product.
    #[oai(
        path = "/products/:sku/suggestions",
        method = "get",
        tag = "ApiTags::Pricing"
    )]
    async fn suggest_for_product(&self, sku: Path<String>) -> SuggestPricesResponse {
        let params = SuggestForProductParams {
            sku: Sku::new(sku.0),
        };

        match self.suggest_use_case.execute_for_product(params).await {
            Ok(suggestion) => SuggestPricesResponse::Ok(Json(suggestion.into())),
            Err(err) => SuggestPricesResponse::from_error(err.into_error_response()),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestPricesResponse {
    #[oai(status = 200)]
    Ok(Json<PriceSuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl SuggestPricesResponse {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => SuggestPricesResponse::BadRequest(json),
            404 => SuggestPricesResponse::NotFound(json),
            _ => SuggestPricesResponse::InternalError(json),
        }
    }
}
