use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::backup::errors::BackupError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for BackupError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            BackupError::WriteFailed => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "BackupError",
                "backup.write_failed",
            ),
            BackupError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
