use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::batch::errors::BatchError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for BatchError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            BatchError::NothingToExport => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "batch.nothing_to_export",
            ),
            BatchError::InvalidFileName => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "batch.invalid_file_name",
            ),
            BatchError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "batch.not_found")
            }
            BatchError::ExportFailed => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "ExportError",
                "batch.export_failed",
            ),
            BatchError::StorageFailed => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "batch.storage_failed",
            ),
            BatchError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
