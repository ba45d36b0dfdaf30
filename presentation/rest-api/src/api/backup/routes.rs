use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::backup::model::BackupReason;
use business::domain::backup::use_cases::create::{CreateBackupParams, CreateBackupUseCase};

use crate::api::backup::dto::BackupResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BackupApi {
    create_use_case: Arc<dyn CreateBackupUseCase>,
}

impl BackupApi {
    pub fn new(create_use_case: Arc<dyn CreateBackupUseCase>) -> Self {
        Self { create_use_case }
    }
}

#[OpenApi]
impl BackupApi {
    /// Back up the catalog
    ///
    /// Writes a JSON snapshot of every product.
    #[oai(path = "/backup", method = "post", tag = "ApiTags::Backups")]
    async fn create_backup(&self) -> CreateBackupResponse {
        match self
            .create_use_case
            .execute(CreateBackupParams {
                reason: BackupReason::UserRequest,
            })
            .await
        {
            Ok(backup) => CreateBackupResponse::Created(Json(backup.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateBackupResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBackupResponse {
    #[oai(status = 201)]
    Created(Json<BackupResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
