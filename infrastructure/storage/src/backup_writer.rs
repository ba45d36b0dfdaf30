use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use business::domain::backup::errors::BackupError;
use business::domain::backup::services::BackupWriter;
use business::domain::product::model::Product;

/// Stored shape of one product. Catalog keys match the seed file so a
/// snapshot can be fed back as seed input.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductSnapshot<'a> {
    sku: &'a str,
    name: &'a str,
    stock: i64,
    cost_price: f64,
    current_price: f64,
    sales_qty: i64,
    abc_margin: String,
    margin_total: f64,
    source_status: &'a str,
    new_price: Option<f64>,
    status: String,
    batch_id: Option<i64>,
    manual_flag: bool,
    updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Product> for ProductSnapshot<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            sku: product.sku.as_str(),
            name: &product.name,
            stock: product.stock,
            cost_price: product.cost_price,
            current_price: product.current_price,
            sales_qty: product.sales_qty,
            abc_margin: product.abc_margin.to_string(),
            margin_total: product.margin_total,
            source_status: &product.source_status,
            new_price: product.new_price,
            status: product.status.to_string(),
            batch_id: product.batch_id,
            manual_flag: product.manual_flag,
            updated_at: product.updated_at,
        }
    }
}

/// Writes catalog snapshots as pretty-printed JSON files.
pub struct JsonBackupWriter {
    dir: PathBuf,
}

impl JsonBackupWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl BackupWriter for JsonBackupWriter {
    async fn write(&self, file_name: &str, products: &[Product]) -> Result<(), BackupError> {
        let snapshot: Vec<ProductSnapshot> = products.iter().map(ProductSnapshot::from).collect();
        let content = serde_json::to_vec_pretty(&snapshot).map_err(|e| {
            tracing::error!("Could not serialize backup {}: {}", file_name, e);
            BackupError::WriteFailed
        })?;

        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            tracing::error!("Could not create backup directory {}: {}", self.dir.display(), e);
            BackupError::WriteFailed
        })?;

        tokio::fs::write(self.dir.join(file_name), content)
            .await
            .map_err(|e| {
                tracing::error!("Could not write backup {}: {}", file_name, e);
                BackupError::WriteFailed
            })
    }
}
