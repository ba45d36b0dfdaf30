use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use storage::{CsvBatchExporter, JsonBackupWriter, JsonCatalogSource};

use business::application::backup::create::CreateBackupUseCaseImpl;
use business::application::batch::create::CreateBatchUseCaseImpl;
use business::application::batch::download::DownloadBatchUseCaseImpl;
use business::application::batch::get_all::GetAllBatchesUseCaseImpl;
use business::application::catalog::seed::SeedCatalogUseCaseImpl;
use business::application::pricing::suggest::SuggestPricesUseCaseImpl;
use business::application::product::get_page::GetProductPageUseCaseImpl;
use business::application::product::review::ReviewProductUseCaseImpl;

use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub pricing_api: crate::api::pricing::routes::PricingApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub batch_api: crate::api::batch::routes::BatchApi,
    pub backup_api: crate::api::backup::routes::BackupApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, storage: &StorageConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let catalog_source = Arc::new(JsonCatalogSource::new(&storage.seed_file));
        let batch_exporter = Arc::new(CsvBatchExporter::new(&storage.exports_dir));
        let backup_writer = Arc::new(JsonBackupWriter::new(&storage.backups_dir));

        // Pricing and review use cases
        let suggest_use_case = Arc::new(SuggestPricesUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_page_use_case = Arc::new(GetProductPageUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let review_use_case = Arc::new(ReviewProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Catalog maintenance use cases
        let backup_use_case = Arc::new(CreateBackupUseCaseImpl {
            repository: product_repository.clone(),
            writer: backup_writer,
            logger: logger.clone(),
        });
        let seed_use_case = Arc::new(SeedCatalogUseCaseImpl {
            repository: product_repository.clone(),
            source: catalog_source,
            backup: backup_use_case.clone(),
            logger: logger.clone(),
        });

        // Export use cases
        let create_batch_use_case = Arc::new(CreateBatchUseCaseImpl {
            repository: product_repository,
            exporter: batch_exporter.clone(),
            logger: logger.clone(),
        });
        let get_all_batches_use_case = Arc::new(GetAllBatchesUseCaseImpl {
            exporter: batch_exporter.clone(),
            logger: logger.clone(),
        });
        let download_batch_use_case = Arc::new(DownloadBatchUseCaseImpl {
            exporter: batch_exporter,
            logger,
        });

        Self {
            health_api,
            pricing_api: crate::api::pricing::routes::PricingApi::new(suggest_use_case),
            product_api: crate::api::product::routes::ProductApi::new(
                get_page_use_case,
                review_use_case,
            ),
            catalog_api: crate::api::catalog::routes::CatalogApi::new(seed_use_case),
            batch_api: crate::api::batch::routes::BatchApi::new(
                create_batch_use_case,
                get_all_batches_use_case,
                download_batch_use_case,
            ),
            backup_api: crate::api::backup::routes::BackupApi::new(backup_use_case),
        }
    }
}
