use super::model::Product;
use super::value_objects::ReviewStatus;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const MAX_PAGE_SIZE: u32 = 500;

/// Which review statuses a listing includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(ReviewStatus),
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::Only(ReviewStatus::Pending)
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

/// A page request over the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub status: StatusFilter,
    /// Whitespace separated terms, each matched against SKU or name.
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl ProductQuery {
    pub fn new(
        status: StatusFilter,
        search: Option<String>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Self {
        Self {
            status,
            search: search.unwrap_or_default(),
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Lowercased, non-empty search terms.
    pub fn terms(&self) -> Vec<String> {
        self.search
            .split_whitespace()
            .map(|term| term.to_lowercase())
            .collect()
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new(StatusFilter::default(), None, None, None)
    }
}

#[derive(Debug, Clone)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
