use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::use_cases::seed::SeedCatalogUseCase;

use crate::api::catalog::dto::SeedSummaryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    seed_use_case: Arc<dyn SeedCatalogUseCase>,
}

impl CatalogApi {
    pub fn new(seed_use_case: Arc<dyn SeedCatalogUseCase>) -> Self {
        Self { seed_use_case }
    }
}

#[OpenApi]
impl CatalogApi {
    /// Seed the catalog
    ///
    /// Backs up the current catalog, then replaces it with the products of
    /// the seed file. Every imported product starts as pending.
    #[oai(path = "/seed", method = "post", tag = "ApiTags::Catalog")]
    async fn seed(&self) -> SeedResponse {
        match self.seed_use_case.execute().await {
            Ok(summary) => SeedResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => SeedResponse::UnprocessableEntity(json),
                    _ => SeedResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SeedResponse {
    #[oai(status = 200)]
    Ok(Json<SeedSummaryResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
