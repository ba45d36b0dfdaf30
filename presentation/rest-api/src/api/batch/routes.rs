use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Attachment, AttachmentType, Json},
};

use business::domain::batch::use_cases::create::CreateBatchUseCase;
use business::domain::batch::use_cases::download::{DownloadBatchParams, DownloadBatchUseCase};
use business::domain::batch::use_cases::get_all::GetAllBatchesUseCase;

use crate::api::batch::dto::{BatchFileResponse, BatchResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BatchApi {
    create_use_case: Arc<dyn CreateBatchUseCase>,
    get_all_use_case: Arc<dyn GetAllBatchesUseCase>,
    download_use_case: Arc<dyn DownloadBatchUseCase>,
}

impl BatchApi {
    pub fn new(
        create_use_case: Arc<dyn CreateBatchUseCase>,
        get_all_use_case: Arc<dyn GetAllBatchesUseCase>,
        download_use_case: Arc<dyn DownloadBatchUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            download_use_case,
        }
    }
}

/// Export batch API
///
/// Approved prices leave the system as CSV batches.
#[OpenApi]
impl BatchApi {
    /// Create an export batch
    ///
    /// Writes every approved product into a new CSV file and marks them exported.
    #[oai(path = "/batches", method = "post", tag = "ApiTags::Batches")]
    async fn create_batch(&self) -> CreateBatchResponse {
        match self.create_use_case.execute().await {
            Ok(batch) => CreateBatchResponse::Created(Json(batch.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateBatchResponse::BadRequest(json),
                    _ => CreateBatchResponse::InternalError(json),
                }
            }
        }
    }

    /// List export files
    ///
    /// Newest first.
    #[oai(path = "/batches", method = "get", tag = "ApiTags::Batches")]
    async fn get_batches(&self) -> GetBatchesResponse {
        match self.get_all_use_case.execute().await {
            Ok(files) => {
                let responses: Vec<BatchFileResponse> =
                    files.into_iter().map(|f| f.into()).collect();
                GetBatchesResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetBatchesResponse::InternalError(json)
            }
        }
    }

    /// Download an export file
    #[oai(path = "/download/:file_name", method = "get", tag = "ApiTags::Batches")]
    async fn download(&self, file_name: Path<String>) -> DownloadBatchResponse {
        match self
            .download_use_case
            .execute(DownloadBatchParams {
                file_name: file_name.0,
            })
            .await
        {
            Ok(download) => DownloadBatchResponse::Ok(
                Attachment::new(download.content)
                    .attachment_type(AttachmentType::Attachment)
                    .filename(download.file_name),
            ),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DownloadBatchResponse::BadRequest(json),
                    404 => DownloadBatchResponse::NotFound(json),
                    _ => DownloadBatchResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateBatchResponse {
    #[oai(status = 201)]
    Created(Json<BatchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetBatchesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<BatchFileResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadBatchResponse {
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
