use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::SeedError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SeedError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            SeedError::SourceUnavailable => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "SeedError",
                "seed.source_unavailable",
            ),
            SeedError::SourceInvalid => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                "SeedError",
                "seed.source_invalid",
            ),
            SeedError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
