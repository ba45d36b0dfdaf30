use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object, types::MaybeUndefined};

use business::domain::product::model::Product;
use business::domain::product::query::{ProductPage, StatusFilter};
use business::domain::product::value_objects::{
    AbcClass, PriceChange, ReviewChange, ReviewStatus,
};

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum ReviewStatusDto {
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "approved")]
    Approved,
    #[oai(rename = "deferred")]
    Deferred,
    #[oai(rename = "exported")]
    Exported,
}

impl From<ReviewStatus> for ReviewStatusDto {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => ReviewStatusDto::Pending,
            ReviewStatus::Approved => ReviewStatusDto::Approved,
            ReviewStatus::Deferred => ReviewStatusDto::Deferred,
            ReviewStatus::Exported => ReviewStatusDto::Exported,
        }
    }
}

impl From<ReviewStatusDto> for ReviewStatus {
    fn from(dto: ReviewStatusDto) -> Self {
        match dto {
            ReviewStatusDto::Pending => ReviewStatus::Pending,
            ReviewStatusDto::Approved => ReviewStatus::Approved,
            ReviewStatusDto::Deferred => ReviewStatus::Deferred,
            ReviewStatusDto::Exported => ReviewStatus::Exported,
        }
    }
}

/// Status filter for listings; `all` disables filtering.
#[derive(Debug, Clone, PartialEq, Enum)]
pub enum StatusFilterDto {
    #[oai(rename = "all")]
    All,
    #[oai(rename = "pending")]
    Pending,
    #[oai(rename = "approved")]
    Approved,
    #[oai(rename = "deferred")]
    Deferred,
    #[oai(rename = "exported")]
    Exported,
}

impl From<StatusFilterDto> for StatusFilter {
    fn from(dto: StatusFilterDto) -> Self {
        match dto {
            StatusFilterDto::All => StatusFilter::All,
            StatusFilterDto::Pending => StatusFilter::Only(ReviewStatus::Pending),
            StatusFilterDto::Approved => StatusFilter::Only(ReviewStatus::Approved),
            StatusFilterDto::Deferred => StatusFilter::Only(ReviewStatus::Deferred),
            StatusFilterDto::Exported => StatusFilter::Only(ReviewStatus::Exported),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum AbcClassDto {
    A,
    B,
    C,
    N,
}

impl From<AbcClass> for AbcClassDto {
    fn from(class: AbcClass) -> Self {
        match class {
            AbcClass::A => AbcClassDto::A,
            AbcClass::B => AbcClassDto::B,
            AbcClass::C => AbcClassDto::C,
            AbcClass::N => AbcClassDto::N,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub sku: String,
    pub name: String,
    pub stock: i64,
    pub cost_price: f64,
    pub current_price: f64,
    pub sales_qty: i64,
    /// ABC class by margin contribution
    pub abc_margin: AbcClassDto,
    pub margin_total: f64,
    pub source_status: String,
    /// Price chosen during review
    #[oai(skip_serializing_if_is_none)]
    pub new_price: Option<f64>,
    pub status: ReviewStatusDto,
    /// Export batch the product was shipped in
    #[oai(skip_serializing_if_is_none)]
    pub batch_id: Option<i64>,
    pub manual_flag: bool,
    /// Estimated revenue lost per day while the price is not revised
    pub daily_loss: f64,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let daily_loss = product.daily_loss();
        Self {
            sku: product.sku.to_string(),
            name: product.name,
            stock: product.stock,
            cost_price: product.cost_price,
            current_price: product.current_price,
            sales_qty: product.sales_qty,
            abc_margin: product.abc_margin.into(),
            margin_total: product.margin_total,
            source_status: product.source_status,
            new_price: product.new_price,
            status: product.status.into(),
            batch_id: product.batch_id,
            manual_flag: product.manual_flag,
            daily_loss,
            updated_at: product.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PageMetaResponse {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

#[derive(Debug, Clone, Object)]
pub struct ProductPageResponse {
    pub products: Vec<ProductResponse>,
    pub meta: PageMetaResponse,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        let pages = page.total.div_ceil(u64::from(page.limit.max(1)));
        Self {
            products: page.products.into_iter().map(|p| p.into()).collect(),
            meta: PageMetaResponse {
                total: page.total,
                page: page.page,
                limit: page.limit,
                pages,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ReviewProductRequest {
    /// New price; `null` clears it, omitted keeps it
    pub new_price: MaybeUndefined<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<ReviewStatusDto>,
    #[oai(skip_serializing_if_is_none)]
    pub manual_flag: Option<bool>,
}

impl From<ReviewProductRequest> for ReviewChange {
    fn from(request: ReviewProductRequest) -> Self {
        let new_price = match request.new_price {
            MaybeUndefined::Undefined => PriceChange::Keep,
            MaybeUndefined::Null => PriceChange::Clear,
            MaybeUndefined::Value(price) => PriceChange::Set(price),
        };
        Self {
            new_price,
            status: request.status.map(|s| s.into()),
            manual_flag: request.manual_flag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductProps;
    use business::domain::shared::value_objects::Sku;

    fn review(new_price: MaybeUndefined<f64>) -> ReviewChange {
        ReviewProductRequest {
            new_price,
            status: Some(ReviewStatusDto::Approved),
            manual_flag: None,
        }
        .into()
    }

    #[test]
    fn should_distinguish_missing_and_null_price() {
        assert_eq!(review(MaybeUndefined::Undefined).new_price, PriceChange::Keep);
        assert_eq!(review(MaybeUndefined::Null).new_price, PriceChange::Clear);
        assert_eq!(
            review(MaybeUndefined::Value(45.0)).new_price,
            PriceChange::Set(45.0)
        );
        assert_eq!(
            review(MaybeUndefined::Null).status,
            Some(ReviewStatus::Approved)
        );
    }

    #[test]
    fn should_count_pages_from_total_and_limit() {
        let product = Product::new(NewProductProps {
            sku: Sku::new("A1"),
            name: "Mug".to_string(),
            stock: 1,
            cost_price: 10.0,
            current_price: 20.0,
            sales_qty: 365,
            abc_margin: AbcClass::A,
            margin_total: 0.0,
            source_status: String::new(),
        })
        .unwrap();

        let response: ProductPageResponse = ProductPage {
            products: vec![product],
            total: 101,
            page: 1,
            limit: 50,
        }
        .into();

        assert_eq!(response.meta.pages, 3);
        assert_eq!(response.products[0].daily_loss, 1.0);
    }

    #[test]
    fn should_map_all_to_unfiltered_listing() {
        assert_eq!(StatusFilter::from(StatusFilterDto::All), StatusFilter::All);
        assert_eq!(
            StatusFilter::from(StatusFilterDto::Deferred),
            StatusFilter::Only(ReviewStatus::Deferred)
        );
    }
}
