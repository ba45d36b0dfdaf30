use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::catalog::import::SeedSummary;

#[derive(Debug, Clone, Object)]
pub struct SeedSummaryResponse {
    /// Products written to the catalog
    pub inserted: usize,
    /// Rows dropped from the seed file
    pub skipped: usize,
    /// Dropped rows per reason
    pub skip_reasons: BTreeMap<String, usize>,
}

impl From<SeedSummary> for SeedSummaryResponse {
    fn from(summary: SeedSummary) -> Self {
        Self {
            inserted: summary.inserted,
            skipped: summary.skipped,
            skip_reasons: summary
                .skip_reasons
                .into_iter()
                .map(|(reason, count)| (reason.to_string(), count))
                .collect(),
        }
    }
}
