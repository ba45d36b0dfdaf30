use std::path::PathBuf;

use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::AbcClass;
use business::domain::shared::value_objects::Sku;

pub fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("price-revision-{}", uuid::Uuid::new_v4()))
}

pub fn product(sku: &str, current_price: f64, new_price: Option<f64>) -> Product {
    let mut product = Product::new(NewProductProps {
        sku: Sku::new(sku),
        name: format!("Product {}", sku),
        stock: 3,
        cost_price: current_price / 2.0,
        current_price,
        sales_qty: 12,
        abc_margin: AbcClass::A,
        margin_total: 100.0,
        source_status: "Both".to_string(),
    })
    .unwrap();
    product.new_price = new_price;
    product
}
