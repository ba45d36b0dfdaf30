mod backup_writer;
mod batch_exporter;
mod catalog_source;
#[cfg(test)]
mod test_support;

pub use backup_writer::JsonBackupWriter;
pub use batch_exporter::CsvBatchExporter;
pub use catalog_source::JsonCatalogSource;
