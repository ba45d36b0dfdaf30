use chrono::{DateTime, Utc};

use super::errors::ProductError;
use super::value_objects::{AbcClass, PriceChange, ReviewChange, ReviewStatus};
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{PriceSuggestion, compute_suggestions};
use crate::domain::shared::value_objects::Sku;

/// Share of the current price considered lost per unit sold while a revision is pending.
const DAILY_LOSS_RATE: f64 = 0.05;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sku: Sku,
    pub name: String,
    pub stock: i64,
    pub cost_price: f64,
    pub current_price: f64,
    pub sales_qty: i64,
    pub abc_margin: AbcClass,
    pub margin_total: f64,
    pub source_status: String,
    pub new_price: Option<f64>,
    pub status: ReviewStatus,
    pub batch_id: Option<i64>,
    pub manual_flag: bool,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub sku: Sku,
    pub name: String,
    pub stock: i64,
    pub cost_price: f64,
    pub current_price: f64,
    pub sales_qty: i64,
    pub abc_margin: AbcClass,
    pub margin_total: f64,
    pub source_status: String,
}

impl Product {
    /// Creates a catalog product waiting for review.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.sku.is_blank() {
            return Err(ProductError::SkuEmpty);
        }

        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.stock < 0 {
            return Err(ProductError::NegativeStock);
        }

        Ok(Self {
            sku: props.sku,
            name: props.name,
            stock: props.stock,
            cost_price: props.cost_price,
            current_price: props.current_price,
            sales_qty: props.sales_qty,
            abc_margin: props.abc_margin,
            margin_total: props.margin_total,
            source_status: props.source_status,
            new_price: None,
            status: ReviewStatus::Pending,
            batch_id: None,
            manual_flag: false,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        sku: Sku,
        name: String,
        stock: i64,
        cost_price: f64,
        current_price: f64,
        sales_qty: i64,
        abc_margin: AbcClass,
        margin_total: f64,
        source_status: String,
        new_price: Option<f64>,
        status: ReviewStatus,
        batch_id: Option<i64>,
        manual_flag: bool,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            sku,
            name,
            stock,
            cost_price,
            current_price,
            sales_qty,
            abc_margin,
            margin_total,
            source_status,
            new_price,
            status,
            batch_id,
            manual_flag,
            updated_at,
        }
    }

    /// Estimated revenue lost per day while the price stays unrevised.
    pub fn daily_loss(&self) -> f64 {
        self.current_price * DAILY_LOSS_RATE * (self.sales_qty as f64 / DAYS_PER_YEAR)
    }

    pub fn price_suggestions(&self) -> Result<PriceSuggestion, PricingError> {
        compute_suggestions(self.current_price)
    }

    /// Applies a reviewer's change.
    ///
    /// Business rules:
    /// - Exported products are locked
    /// - `exported` is only reachable through a batch export
    /// - A proposed price must be finite and positive
    /// - An approved product must carry a proposed price
    pub fn apply_review(&mut self, change: ReviewChange) -> Result<(), ProductError> {
        if self.status == ReviewStatus::Exported {
            return Err(ProductError::AlreadyExported);
        }

        if change.status == Some(ReviewStatus::Exported) {
            return Err(ProductError::StatusNotAssignable);
        }

        let new_price = match change.new_price {
            PriceChange::Keep => self.new_price,
            PriceChange::Clear => None,
            PriceChange::Set(price) if price.is_finite() && price > 0.0 => Some(price),
            PriceChange::Set(_) => return Err(ProductError::InvalidPrice),
        };

        let status = change.status.unwrap_or(self.status);
        if status == ReviewStatus::Approved && new_price.is_none() {
            return Err(ProductError::ApprovalRequiresPrice);
        }

        self.new_price = new_price;
        self.status = status;
        if let Some(flag) = change.manual_flag {
            self.manual_flag = flag;
        }
        self.updated_at = Utc::now();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            sku: Sku::new("SKU-1"),
            name: "Ceramic mug".to_string(),
            stock: 12,
            cost_price: 20.0,
            current_price: 40.0,
            sales_qty: 365,
            abc_margin: AbcClass::A,
            margin_total: 7300.0,
            source_status: String::new(),
        }
    }

    fn pending_product() -> Product {
        Product::new(props()).unwrap()
    }

    #[test]
    fn should_create_pending_product_without_new_price() {
        let product = pending_product();

        assert_eq!(product.status, ReviewStatus::Pending);
        assert!(product.new_price.is_none());
        assert!(product.batch_id.is_none());
        assert!(!product.manual_flag);
    }

    #[test]
    fn should_reject_blank_sku() {
        let result = Product::new(NewProductProps {
            sku: Sku::new(" "),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ProductError::SkuEmpty));
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(NewProductProps {
            name: "   ".to_string(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_negative_stock_but_accept_zero() {
        let negative = Product::new(NewProductProps {
            stock: -1,
            ..props()
        });
        let zero = Product::new(NewProductProps { stock: 0, ..props() });

        assert!(matches!(negative.unwrap_err(), ProductError::NegativeStock));
        assert!(zero.is_ok());
    }

    #[test]
    fn should_compute_daily_loss_from_price_and_yearly_sales() {
        let product = pending_product();

        assert!((product.daily_loss() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn should_suggest_prices_from_current_price() {
        let product = pending_product();

        assert_eq!(
            product.price_suggestions().unwrap().prices,
            vec![43.0, 45.0, 50.0]
        );
    }

    #[test]
    fn should_approve_with_new_price() {
        let mut product = pending_product();

        product
            .apply_review(ReviewChange {
                new_price: PriceChange::Set(45.0),
                status: Some(ReviewStatus::Approved),
                manual_flag: None,
            })
            .unwrap();

        assert_eq!(product.status, ReviewStatus::Approved);
        assert_eq!(product.new_price, Some(45.0));
    }

    #[test]
    fn should_reject_approval_without_price() {
        let mut product = pending_product();

        let result = product.apply_review(ReviewChange {
            status: Some(ReviewStatus::Approved),
            ..ReviewChange::default()
        });

        assert!(matches!(
            result.unwrap_err(),
            ProductError::ApprovalRequiresPrice
        ));
        assert_eq!(product.status, ReviewStatus::Pending);
    }

    #[test]
    fn should_reset_to_pending_and_clear_price() {
        let mut product = pending_product();
        product.new_price = Some(45.0);
        product.status = ReviewStatus::Approved;

        product
            .apply_review(ReviewChange {
                new_price: PriceChange::Clear,
                status: Some(ReviewStatus::Pending),
                manual_flag: None,
            })
            .unwrap();

        assert_eq!(product.status, ReviewStatus::Pending);
        assert!(product.new_price.is_none());
    }

    #[test]
    fn should_reject_clearing_price_of_approved_product() {
        let mut product = pending_product();
        product.new_price = Some(45.0);
        product.status = ReviewStatus::Approved;

        let result = product.apply_review(ReviewChange {
            new_price: PriceChange::Clear,
            ..ReviewChange::default()
        });

        assert!(matches!(
            result.unwrap_err(),
            ProductError::ApprovalRequiresPrice
        ));
    }

    #[test]
    fn should_defer_and_flag_without_touching_price() {
        let mut product = pending_product();

        product
            .apply_review(ReviewChange {
                new_price: PriceChange::Keep,
                status: Some(ReviewStatus::Deferred),
                manual_flag: Some(true),
            })
            .unwrap();

        assert_eq!(product.status, ReviewStatus::Deferred);
        assert!(product.manual_flag);
        assert!(product.new_price.is_none());
    }

    #[test]
    fn should_reject_non_positive_or_non_finite_price() {
        for price in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut product = pending_product();
            let result = product.apply_review(ReviewChange {
                new_price: PriceChange::Set(price),
                ..ReviewChange::default()
            });

            assert!(matches!(result.unwrap_err(), ProductError::InvalidPrice));
        }
    }

    #[test]
    fn should_reject_exported_as_review_status() {
        let mut product = pending_product();

        let result = product.apply_review(ReviewChange {
            status: Some(ReviewStatus::Exported),
            ..ReviewChange::default()
        });

        assert!(matches!(
            result.unwrap_err(),
            ProductError::StatusNotAssignable
        ));
    }

    #[test]
    fn should_lock_exported_products() {
        let mut product = pending_product();
        product.status = ReviewStatus::Exported;
        product.batch_id = Some(1_700_000_000_000);

        let result = product.apply_review(ReviewChange {
            manual_flag: Some(true),
            ..ReviewChange::default()
        });

        assert!(matches!(result.unwrap_err(), ProductError::AlreadyExported));
        assert_eq!(product.batch_id, Some(1_700_000_000_000));
    }
}
