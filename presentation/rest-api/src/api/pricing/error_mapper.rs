use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::pricing::errors::PricingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for PricingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            PricingError::InvalidPrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "pricing.invalid_price",
            ),
            PricingError::ProductNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            PricingError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
