use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

pub const BATCH_FILE_PREFIX: &str = "batch_";
pub const BATCH_FILE_EXTENSION: &str = "csv";

/// One export run over the approved products.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: i64,
    pub count: usize,
    pub file_name: String,
}

impl Batch {
    pub fn new(id: i64, count: usize) -> Self {
        Self {
            id,
            count,
            file_name: batch_file_name(id),
        }
    }
}

/// An export file found in the export directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFile {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub size: u64,
}

impl BatchFile {
    /// The date comes from the batch id in the name; `modified_at` is used otherwise.
    pub fn new(name: String, size: u64, modified_at: DateTime<Utc>) -> Self {
        let created_at = batch_id_from_file_name(&name)
            .and_then(|id| Utc.timestamp_millis_opt(id).single())
            .unwrap_or(modified_at);
        Self {
            name,
            created_at,
            size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchDownload {
    pub file_name: String,
    pub content: Vec<u8>,
}

pub fn batch_file_name(id: i64) -> String {
    format!("{}{}.{}", BATCH_FILE_PREFIX, id, BATCH_FILE_EXTENSION)
}

pub fn batch_id_from_file_name(name: &str) -> Option<i64> {
    name.strip_prefix(BATCH_FILE_PREFIX)?
        .strip_suffix(BATCH_FILE_EXTENSION)?
        .strip_suffix('.')?
        .parse()
        .ok()
}

pub fn is_batch_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == BATCH_FILE_EXTENSION)
}

/// Reduces a requested name to its last path component so it cannot leave
/// the export directory.
pub fn safe_file_name(requested: &str) -> Option<String> {
    let name = Path::new(requested).file_name()?.to_str()?;
    if name.trim().is_empty() {
        return None;
    }
    Some(name.to_string())
}
