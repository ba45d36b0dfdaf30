use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::SkuEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.sku_empty",
            ),
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NegativeStock => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.negative_stock",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::ApprovalRequiresPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.approval_requires_price",
            ),
            ProductError::StatusNotAssignable => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.status_not_assignable",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::AlreadyExported => (
                StatusCode::CONFLICT,
                "ConflictError",
                "product.already_exported",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        error_response(status, name, message)
    }
}
