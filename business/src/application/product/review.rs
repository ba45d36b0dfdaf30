use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::review::{ReviewProductParams, ReviewProductUseCase};

pub struct ReviewProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReviewProductUseCase for ReviewProductUseCaseImpl {
    async fn execute(&self, params: ReviewProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Reviewing product {}: {:?}", params.sku, params.change));

        let mut product = self
            .repository
            .get_by_sku(&params.sku)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        product.apply_review(params.change)?;
        self.repository.save(&product).await?;

        self.logger.info(&format!(
            "Product {} is now {} (new price {:?})",
            product.sku, product.status, product.new_price
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::repository::ExportClaim;
    use crate::domain::product::query::{ProductPage, ProductQuery};
    use crate::domain::product::value_objects::{
        AbcClass, PriceChange, ReviewChange, ReviewStatus,
    };
    use crate::domain::shared::value_objects::Sku;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find_page(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_sku(&self, sku: &Sku) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn replace_all(&self, products: &[Product]) -> Result<(), RepositoryError>;
            async fn claim_approved(&self, batch_id: i64) -> Result<Box<dyn ExportClaim>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product_with_status(status: ReviewStatus, new_price: Option<f64>) -> Product {
        Product::from_repository(
            Sku::new("MUG-1"),
            "Ceramic mug".to_string(),
            12,
            20.0,
            40.0,
            120,
            AbcClass::A,
            2400.0,
            String::new(),
            new_price,
            status,
            None,
            false,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_approve_product_with_chosen_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_sku()
            .returning(|_| Ok(product_with_status(ReviewStatus::Pending, None)));
        mock_repo
            .expect_save()
            .withf(|p| p.status == ReviewStatus::Approved && p.new_price == Some(45.0))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ReviewProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReviewProductParams {
                sku: Sku::new("MUG-1"),
                change: ReviewChange {
                    new_price: PriceChange::Set(45.0),
                    status: Some(ReviewStatus::Approved),
                    manual_flag: None,
                },
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.status, ReviewStatus::Approved);
        assert_eq!(product.new_price, Some(45.0));
    }

    #[tokio::test]
    async fn should_return_product_to_work_and_clear_price() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_sku()
            .returning(|_| Ok(product_with_status(ReviewStatus::Approved, Some(45.0))));
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = ReviewProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReviewProductParams {
                sku: Sku::new("MUG-1"),
                change: ReviewChange {
                    new_price: PriceChange::Clear,
                    status: Some(ReviewStatus::Pending),
                    manual_flag: None,
                },
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.status, ReviewStatus::Pending);
        assert!(product.new_price.is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_sku() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_sku()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_save().never();

        let use_case = ReviewProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReviewProductParams {
                sku: Sku::new("missing"),
                change: ReviewChange::default(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_not_save_when_review_is_rejected() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_sku()
            .returning(|_| Ok(product_with_status(ReviewStatus::Exported, Some(45.0))));
        mock_repo.expect_save().never();

        let use_case = ReviewProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ReviewProductParams {
                sku: Sku::new("MUG-1"),
                change: ReviewChange {
                    status: Some(ReviewStatus::Pending),
                    ..ReviewChange::default()
                },
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::AlreadyExported));
    }
}
