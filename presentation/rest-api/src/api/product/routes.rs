use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::query::{ProductQuery, StatusFilter};
use business::domain::product::use_cases::get_page::{
    GetProductPageParams, GetProductPageUseCase,
};
use business::domain::product::use_cases::review::{ReviewProductParams, ReviewProductUseCase};
use business::domain::shared::value_objects::Sku;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    ProductPageResponse, ProductResponse, ReviewProductRequest, StatusFilterDto,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_page_use_case: Arc<dyn GetProductPageUseCase>,
    review_use_case: Arc<dyn ReviewProductUseCase>,
}

impl ProductApi {
    pub fn new(
        get_page_use_case: Arc<dyn GetProductPageUseCase>,
        review_use_case: Arc<dyn ReviewProductUseCase>,
    ) -> Self {
        Self {
            get_page_use_case,
            review_use_case,
        }
    }
}

/// Product review API
///
/// Endpoints for listing the catalog and recording review decisions.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products, A class first and the costliest
    /// pending revisions on top.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        /// Page number starting at 1 (default: 1)
        page: Query<Option<u32>>,
        /// Page size (default: 50, max: 500)
        limit: Query<Option<u32>>,
        /// Review status or `all` (default: pending)
        status: Query<Option<StatusFilterDto>>,
        /// Search terms, each matched against SKU or name
        q: Query<Option<String>>,
    ) -> GetProductsResponse {
        let query = ProductQuery::new(
            status.0.map(StatusFilter::from).unwrap_or_default(),
            q.0,
            page.0,
            limit.0,
        );

        match self
            .get_page_use_case
            .execute(GetProductPageParams { query })
            .await
        {
            Ok(page) => GetProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetProductsResponse::InternalError(json)
            }
        }
    }

    /// Review a product
    ///
    /// Sets or clears the new price, changes the review status or the manual flag.
    #[oai(path = "/products/:sku", method = "patch", tag = "ApiTags::Products")]
    async fn review_product(
        &self,
        sku: Path<String>,
        body: Json<ReviewProductRequest>,
    ) -> ReviewProductResponse {
        let params = ReviewProductParams {
            sku: Sku::new(sku.0),
            change: body.0.into(),
        };

        match self.review_use_case.execute(params).await {
            Ok(product) => ReviewProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReviewProductResponse::BadRequest(json),
                    404 => ReviewProductResponse::NotFound(json),
                    409 => ReviewProductResponse::Conflict(json),
                    _ => ReviewProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReviewProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
