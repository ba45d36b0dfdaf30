use std::env;
use std::path::PathBuf;

/// Locations of the files the service reads and writes
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub exports_dir: PathBuf,
    pub backups_dir: PathBuf,
    pub seed_file: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - EXPORTS_DIR: Batch export files (default: "public/exports")
    /// - BACKUPS_DIR: Catalog snapshots (default: "backups")
    /// - SEED_FILE: Initial catalog JSON (default: "products_initial.json")
    pub fn from_env() -> Self {
        let path = |key: &str, default: &str| {
            PathBuf::from(env::var(key).unwrap_or_else(|_| default.to_string()))
        };

        Self {
            exports_dir: path("EXPORTS_DIR", "public/exports"),
            backups_dir: path("BACKUPS_DIR", "backups"),
            seed_file: path("SEED_FILE", "products_initial.json"),
        }
    }
}
