use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backup::model::BackupReason;
use crate::domain::backup::use_cases::create::{CreateBackupParams, CreateBackupUseCase};
use crate::domain::catalog::errors::SeedError;
use crate::domain::catalog::import::{SeedSummary, prepare_import};
use crate::domain::catalog::services::CatalogSource;
use crate::domain::catalog::use_cases::seed::SeedCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct SeedCatalogUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub source: Arc<dyn CatalogSource>,
    pub backup: Arc<dyn CreateBackupUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SeedCatalogUseCase for SeedCatalogUseCaseImpl {
    async fn execute(&self) -> Result<SeedSummary, SeedError> {
        self.logger.info("Catalog seed started");

        // A failed backup must not block the seed
        match self
            .backup
            .execute(CreateBackupParams {
                reason: BackupReason::BeforeSeed,
            })
            .await
        {
            Ok(backup) => self
                .logger
                .info(&format!("Backup before seed: {}", backup.file_name)),
            Err(err) => self
                .logger
                .warn(&format!("Could not create backup before seed: {}", err)),
        }

        let records = self.source.load().await?;
        self.logger.info(&format!("Found {} records in catalog source", records.len()));

        let outcome = prepare_import(records);
        self.repository.replace_all(&outcome.products).await?;

        let summary = outcome.summary();
        let reasons: Vec<String> = summary
            .skip_reasons
            .iter()
            .map(|(reason, count)| format!("{}: {}", reason, count))
            .collect();
        self.logger.info(&format!(
            "Catalog seed finished. Inserted: {}, Skipped: {} [{}]",
            summary.inserted,
            summary.skipped,
            reasons.join(", ")
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::repository::ExportClaim;
    use crate::domain::backup::errors::BackupError;
    use crate::domain::backup::model::Backup;
    use crate::domain::catalog::import::{RawProductRecord, RawValue, SkipReason};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use crate::domain::product::query::{ProductPage, ProductQuery};
    use crate::domain::product::value_objects::ReviewStatus;
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
        pub Source {}

        #[async_trait]
        impl CatalogSource for Source {
            async fn load(&self) -> Result<Vec<RawProductRecord>, SeedError>;
        }
    }

    mock! {
        pub BackupUseCase {}

        #[async_trait]
        impl CreateBackupUseCase for BackupUseCase {
            async fn execute(&self, params: CreateBackupParams) -> Result<Backup, BackupError>;
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

    fn record(sku: &str, name: &str, stock: i64) -> RawProductRecord {
        RawProductRecord::new([
            ("sku", RawValue::Text(sku.to_string())),
            ("name", RawValue::Text(name.to_string())),
            ("stock", RawValue::Integer(stock)),
            ("currentPrice", RawValue::Float(99.9)),
        ])
    }

    fn successful_backup() -> MockBackupUseCase {
        let mut backup = MockBackupUseCase::new();
        backup.expect_execute().times(1).returning(|_| {
            Ok(Backup {
                file_name: "backup_before_seed_x.json".to_string(),
                product_count: 0,
                created_at: Utc::now(),
            })
        });
        backup
    }

    #[tokio::test]
    async fn should_replace_catalog_with_kept_records() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_replace_all()
            .withf(|products| {
                products.len() == 2 && products.iter().all(|p| p.status == ReviewStatus::Pending)
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut mock_source = MockSource::new();
        mock_source.expect_load().returning(|| {
            Ok(vec![
                record("A1", "Mug", 3),
                record("A2", "Plate", 0),
                record("A3", "Broken", -1),
            ])
        });

        let use_case = SeedCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            source: Arc::new(mock_source),
            backup: Arc::new(successful_backup()),
            logger: mock_logger(),
        };

        let summary = use_case.execute().await.unwrap();

        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.skip_reasons[&SkipReason::NegativeStock], 1);
    }

    #[tokio::test]
    async fn should_continue_when_backup_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_replace_all().times(1).returning(|_| Ok(()));

        let mut mock_source = MockSource::new();
        mock_source
            .expect_load()
            .returning(|| Ok(vec![record("A1", "Mug", 3)]));

        let mut mock_backup = MockBackupUseCase::new();
        mock_backup
            .expect_execute()
            .returning(|_| Err(BackupError::WriteFailed));

        let use_case = SeedCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            source: Arc::new(mock_source),
            backup: Arc::new(mock_backup),
            logger: mock_logger(),
        };

        let summary = use_case.execute().await.unwrap();

        assert_eq!(summary.inserted, 1);
    }

    #[tokio::test]
    async fn should_keep_catalog_when_source_is_invalid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_replace_all().never();

        let mut mock_source = MockSource::new();
        mock_source
            .expect_load()
            .returning(|| Err(SeedError::SourceInvalid));

        let use_case = SeedCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            source: Arc::new(mock_source),
            backup: Arc::new(successful_backup()),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), SeedError::SourceInvalid));
    }

    #[tokio::test]
    async fn should_report_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_replace_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let mut mock_source = MockSource::new();
        mock_source
            .expect_load()
            .returning(|| Ok(vec![record("A1", "Mug", 3)]));

        let use_case = SeedCatalogUseCaseImpl {
            repository: Arc::new(mock_repo),
            source: Arc::new(mock_source),
            backup: Arc::new(successful_backup()),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), SeedError::Repository(_)));
    }
}
