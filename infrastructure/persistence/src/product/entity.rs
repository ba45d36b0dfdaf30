use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{AbcClass, ReviewStatus};
use business::domain::shared::value_objects::Sku;

pub const PRODUCT_COLUMNS: &str = "sku, name, stock, cost_price, current_price, sales_qty, abc_margin, margin_total, source_status, new_price, status, batch_id, manual_flag, updated_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub sku: String,
    pub name: String,
    pub stock: i64,
    pub cost_price: f64,
    pub current_price: f64,
    pub sales_qty: i64,
    pub abc_margin: String,
    pub margin_total: f64,
    pub source_status: String,
    pub new_price: Option<f64>,
    pub status: String,
    pub batch_id: Option<i64>,
    pub manual_flag: bool,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            Sku::new(self.sku),
            self.name,
            self.stock,
            self.cost_price,
            self.current_price,
            self.sales_qty,
            AbcClass::parse_lenient(&self.abc_margin),
            self.margin_total,
            self.source_status,
            self.new_price,
            self.status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::Pending),
            self.batch_id,
            self.manual_flag,
            self.updated_at,
        )
    }
}
