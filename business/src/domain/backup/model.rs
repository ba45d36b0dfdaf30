use chrono::{DateTime, SecondsFormat, Utc};

/// Why a backup is taken; used as the file name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupReason {
    UserRequest,
    BeforeSeed,
}

impl std::fmt::Display for BackupReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackupReason::UserRequest => write!(f, "user_request"),
            BackupReason::BeforeSeed => write!(f, "before_seed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Backup {
    pub file_name: String,
    pub product_count: usize,
    pub created_at: DateTime<Utc>,
}

/// `backup_<reason>_<timestamp>.json`, with a file-system safe timestamp.
pub fn backup_file_name(reason: BackupReason, at: DateTime<Utc>) -> String {
    let timestamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("backup_{}_{}.json", reason, timestamp)
}
