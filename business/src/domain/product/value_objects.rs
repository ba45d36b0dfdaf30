use serde::{Deserialize, Serialize};

/// Position of a product in the price review workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Deferred,
    Exported,
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Pending => write!(f, "pending"),
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Deferred => write!(f, "deferred"),
            ReviewStatus::Exported => write!(f, "exported"),
        }
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "deferred" => Ok(ReviewStatus::Deferred),
            "exported" => Ok(ReviewStatus::Exported),
            _ => Err(format!("Invalid review status: {}", s)),
        }
    }
}

/// ABC analysis class by margin contribution. `N` means unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbcClass {
    A,
    B,
    C,
    N,
}

impl AbcClass {
    /// Sort rank used when listing products: A first, unclassified last.
    pub fn rank(&self) -> u8 {
        match self {
            AbcClass::A => 1,
            AbcClass::B => 2,
            AbcClass::C => 3,
            AbcClass::N => 4,
        }
    }

    /// Lenient parse for imported data; anything unknown is `N`.
    pub fn parse_lenient(s: &str) -> Self {
        s.trim().parse().unwrap_or(AbcClass::N)
    }
}

impl std::fmt::Display for AbcClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbcClass::A => write!(f, "A"),
            AbcClass::B => write!(f, "B"),
            AbcClass::C => write!(f, "C"),
            AbcClass::N => write!(f, "N"),
        }
    }
}

impl std::str::FromStr for AbcClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(AbcClass::A),
            "B" => Ok(AbcClass::B),
            "C" => Ok(AbcClass::C),
            "N" => Ok(AbcClass::N),
            _ => Err(format!("Invalid ABC class: {}", s)),
        }
    }
}

/// Change to the proposed price requested by a review.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceChange {
    #[default]
    Keep,
    Clear,
    Set(f64),
}

/// Partial update applied by a reviewer. Absent fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewChange {
    pub new_price: PriceChange,
    pub status: Option<ReviewStatus>,
    pub manual_flag: Option<bool>,
}
