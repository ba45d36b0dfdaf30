use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use business::domain::batch::errors::BatchError;
use business::domain::batch::model::{BatchFile, is_batch_file};
use business::domain::batch::services::BatchExporter;
use business::domain::product::model::Product;

#[derive(Serialize)]
struct BatchRow<'a> {
    #[serde(rename = "SKU")]
    sku: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Old price")]
    old_price: f64,
    #[serde(rename = "New price")]
    new_price: Option<f64>,
}

impl<'a> From<&'a Product> for BatchRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            sku: product.sku.as_str(),
            name: &product.name,
            old_price: product.current_price,
            new_price: product.new_price,
        }
    }
}

/// Writes export batches as CSV files into a single directory.
///
/// CSV is the chosen export format, one header row (`SKU,Name,Old price,New price`)
/// and one row per product. It opens in any spreadsheet tool.
pub struct CsvBatchExporter {
    dir: PathBuf,
}

impl CsvBatchExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn render(products: &[Product]) -> Result<Vec<u8>, csv::Error> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for product in products {
            writer.serialize(BatchRow::from(product))?;
        }
        writer.flush()?;
        writer.into_inner().map_err(|e| e.into_error().into())
    }
}

#[async_trait]
impl BatchExporter for CsvBatchExporter {
    async fn write(&self, file_name: &str, products: &[Product]) -> Result<(), BatchError> {
        let content = Self::render(products).map_err(|e| {
            tracing::error!("Could not render batch {}: {}", file_name, e);
            BatchError::ExportFailed
        })?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            tracing::error!("Could not create export directory {}: {}", self.dir.display(), e);
            BatchError::ExportFailed
        })?;

        let path = self.dir.join(file_name);
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                tracing::error!("Could not create batch {}: {}", file_name, e);
                BatchError::ExportFailed
            })?;

        let written = async {
            file.write_all(&content).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = written {
            tracing::error!("Could not write batch {}: {}", file_name, e);
            drop(file);
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!("Partial batch {} left behind: {}", file_name, e);
            }
            return Err(BatchError::ExportFailed);
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<BatchFile>, BatchError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::error!("Could not list export directory {}: {}", self.dir.display(), e);
                return Err(BatchError::StorageFailed);
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|_| BatchError::StorageFailed)?
        {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !is_batch_file(&name) {
                continue;
            }

            let metadata = entry
                .metadata()
                .await
                .map_err(|_| BatchError::StorageFailed)?;
            if !metadata.is_file() {
                continue;
            }
            let modified_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            files.push(BatchFile::new(name, metadata.len(), modified_at));
        }

        Ok(files)
    }

    async fn read(&self, file_name: &str) -> Result<Vec<u8>, BatchError> {
        tokio::fs::read(self.dir.join(file_name))
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => BatchError::NotFound,
                _ => {
                    tracing::error!("Could not read batch {}: {}", file_name, e);
                    BatchError::StorageFailed
                }
            })
    }

    async fn remove(&self, file_name: &str) -> Result<(), BatchError> {
        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!("Could not remove batch {}: {}", file_name, e);
                Err(BatchError::StorageFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{product, temp_dir};

    #[tokio::test]
    async fn should_write_header_and_one_row_per_product() {
        let dir = temp_dir();
        let exporter = CsvBatchExporter::new(&dir);

        exporter
            .write(
                "batch_1.csv",
                &[product("A1", 40.0, Some(45.0)), product("B2", 300.0, Some(350.0))],
            )
            .await
            .unwrap();

        let content = String::from_utf8(exporter.read("batch_1.csv").await.unwrap()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "SKU,Name,Old price,New price");
        assert_eq!(lines[1], "A1,Product A1,40.0,45.0");
        assert_eq!(lines.len(), 3);
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_list_only_csv_files() {
        let dir = temp_dir();
        let exporter = CsvBatchExporter::new(&dir);
        exporter
            .write("batch_1700000000000.csv", &[product("A1", 40.0, Some(45.0))])
            .await
            .unwrap();
        tokio::fs::write(dir.join("notes.txt"), "ignored").await.unwrap();

        let files = exporter.list().await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "batch_1700000000000.csv");
        assert_eq!(files[0].created_at.timestamp_millis(), 1_700_000_000_000);
        assert!(files[0].size > 0);
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_list_nothing_when_directory_is_missing() {
        let exporter = CsvBatchExporter::new(temp_dir());

        let files = exporter.list().await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn should_report_missing_file_as_not_found() {
        let exporter = CsvBatchExporter::new(temp_dir());

        let result = exporter.read("batch_1.csv").await;

        assert!(matches!(result.unwrap_err(), BatchError::NotFound));
    }

    #[tokio::test]
    async fn should_not_overwrite_existing_batch_file() {
        let dir = temp_dir();
        let exporter = CsvBatchExporter::new(&dir);
        exporter
            .write("batch_1.csv", &[product("A1", 40.0, Some(45.0))])
            .await
            .unwrap();

        let result = exporter
            .write("batch_1.csv", &[product("B2", 300.0, Some(350.0))])
            .await;

        assert!(matches!(result.unwrap_err(), BatchError::ExportFailed));
        let content = String::from_utf8(exporter.read("batch_1.csv").await.unwrap()).unwrap();
        assert!(content.contains("A1,Product A1,40.0,45.0"));
        assert!(!content.contains("B2"));
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn should_remove_batch_file_and_tolerate_missing_one() {
        let dir = temp_dir();
        let exporter = CsvBatchExporter::new(&dir);
        exporter
            .write("batch_1.csv", &[product("A1", 40.0, Some(45.0))])
            .await
            .unwrap();

        exporter.remove("batch_1.csv").await.unwrap();
        exporter.remove("batch_1.csv").await.unwrap();

        assert!(matches!(
            exporter.read("batch_1.csv").await.unwrap_err(),
            BatchError::NotFound
        ));
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
