use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::batch::model::{Batch, BatchFile};

/// Route the export files are served from.
pub const DOWNLOAD_PATH: &str = "/api/download";

fn download_url(file_name: &str) -> String {
    format!("{}/{}", DOWNLOAD_PATH, file_name)
}

#[derive(Debug, Clone, Object)]
pub struct BatchResponse {
    /// Creation time in milliseconds, also part of the file name
    pub id: i64,
    /// Number of exported products
    pub count: usize,
    pub file_name: String,
    pub download_url: String,
}

impl From<Batch> for BatchResponse {
    fn from(batch: Batch) -> Self {
        Self {
            id: batch.id,
            count: batch.count,
            download_url: download_url(&batch.file_name),
            file_name: batch.file_name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BatchFileResponse {
    pub name: String,
    pub date: DateTime<Utc>,
    /// File size in bytes
    pub size: u64,
    pub url: String,
}

impl From<BatchFile> for BatchFileResponse {
    fn from(file: BatchFile) -> Self {
        Self {
            url: download_url(&file.name),
            name: file.name,
            date: file.created_at,
            size: file.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_link_batch_to_download_route() {
        let response = BatchResponse::from(Batch::new(1_700_000_000_000, 2));

        assert_eq!(response.file_name, "batch_1700000000000.csv");
        assert_eq!(response.download_url, "/api/download/batch_1700000000000.csv");
    }
}
