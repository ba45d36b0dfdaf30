use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::value_objects::AbcClass;
use crate::domain::shared::value_objects::Sku;

/// Source status of rows that only exist in the ABC report and are never priced.
const ABC_ONLY_SOURCE: &str = "ABC_Only";

/// Scalar as found in exported spreadsheets: numbers sometimes arrive as text.
/// Anything else (booleans, nulls, nested values) is kept as `Other` and ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            RawValue::Integer(v) => Some(*v as f64),
            RawValue::Float(v) => Some(*v),
            RawValue::Text(s) => s.trim().replace(',', ".").parse().ok(),
            RawValue::Other(_) => None,
        }
    }

    fn as_text(&self) -> String {
        match self {
            RawValue::Integer(v) => v.to_string(),
            RawValue::Float(v) => v.to_string(),
            RawValue::Text(s) => s.trim().to_string(),
            RawValue::Other(_) => String::new(),
        }
    }

    /// Zero, blank text and unusable values fall through to the next key.
    fn is_set(&self) -> bool {
        match self {
            RawValue::Integer(v) => *v != 0,
            RawValue::Float(v) => *v != 0.0 && !v.is_nan(),
            RawValue::Text(s) => !s.trim().is_empty(),
            RawValue::Other(_) => false,
        }
    }
}

/// One catalog row as read from the seed file, before normalization.
///
/// Keys are accepted in camelCase and PascalCase; SKU and name also upper
/// case. When several spellings are present the first usable one wins.
/// A row that is not an object is kept as unreadable and skipped on import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProductRecord {
    fields: Option<BTreeMap<String, RawValue>>,
}

impl RawProductRecord {
    pub fn new<K: Into<String>>(fields: impl IntoIterator<Item = (K, RawValue)>) -> Self {
        Self {
            fields: Some(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn unreadable() -> Self {
        Self { fields: None }
    }

    pub fn is_readable(&self) -> bool {
        self.fields.is_some()
    }

    /// First value under `keys` that is set.
    pub fn value(&self, keys: &[&str]) -> Option<&RawValue> {
        let fields = self.fields.as_ref()?;
        keys.iter()
            .filter_map(|key| fields.get(*key))
            .find(|value| value.is_set())
    }

    /// Like `value`, but a zero is kept instead of falling through.
    fn value_or_zero(&self, keys: &[&str]) -> Option<&RawValue> {
        let fields = self.fields.as_ref()?;
        keys.iter()
            .filter_map(|key| fields.get(*key))
            .find(|value| !matches!(value, RawValue::Other(_)))
    }
}

impl<'de> Deserialize<'de> for RawProductRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Row {
            Object(BTreeMap<String, RawValue>),
            Other(IgnoredAny),
        }

        Ok(match Row::deserialize(deserializer)? {
            Row::Object(fields) => Self {
                fields: Some(fields),
            },
            Row::Other(_) => Self::unreadable(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    MissingSkuOrName,
    NegativeStock,
    AbcOnlySource,
    DuplicateSku,
    UnreadableRow,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingSkuOrName => write!(f, "Missing SKU/Name"),
            SkipReason::NegativeStock => write!(f, "Stock < 0"),
            SkipReason::AbcOnlySource => write!(f, "Source=ABC_Only"),
            SkipReason::DuplicateSku => write!(f, "Duplicate SKU"),
            SkipReason::UnreadableRow => write!(f, "Unreadable row"),
        }
    }
}

/// Products kept from a seed file and the tally of dropped rows.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    pub products: Vec<Product>,
    pub skip_reasons: BTreeMap<SkipReason, usize>,
}

impl ImportOutcome {
    pub fn skipped(&self) -> usize {
        self.skip_reasons.values().sum()
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            inserted: self.products.len(),
            skipped: self.skipped(),
            skip_reasons: self.skip_reasons.clone(),
        }
    }

    fn skip(&mut self, reason: SkipReason) {
        *self.skip_reasons.entry(reason).or_default() += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedSummary {
    pub inserted: usize,
    pub skipped: usize,
    pub skip_reasons: BTreeMap<SkipReason, usize>,
}

/// Normalizes raw rows into pending products.
///
/// Business rules:
/// - Missing numbers default to 0, ABC class to `N`, source status to empty
/// - Rows without SKU or name are skipped
/// - Rows with negative stock are skipped (zero stock is kept)
/// - `ABC_Only` rows are skipped
/// - A repeated SKU replaces the earlier row and counts as skipped
pub fn prepare_import(records: Vec<RawProductRecord>) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    let mut positions: BTreeMap<Sku, usize> = BTreeMap::new();

    for record in records {
        let product = match normalize(record) {
            Ok(product) => product,
            Err(reason) => {
                outcome.skip(reason);
                continue;
            }
        };

        if product.source_status == ABC_ONLY_SOURCE {
            outcome.skip(SkipReason::AbcOnlySource);
            continue;
        }

        match positions.get(&product.sku) {
            Some(&index) => {
                outcome.products[index] = product;
                outcome.skip(SkipReason::DuplicateSku);
            }
            None => {
                positions.insert(product.sku.clone(), outcome.products.len());
                outcome.products.push(product);
            }
        }
    }

    outcome
}

fn normalize(record: RawProductRecord) -> Result<Product, SkipReason> {
    if !record.is_readable() {
        return Err(SkipReason::UnreadableRow);
    }

    let number = |keys: &[&str]| record.value(keys).and_then(RawValue::as_f64).unwrap_or(0.0);
    let text = |keys: &[&str]| record.value(keys).map(RawValue::as_text).unwrap_or_default();

    // floor keeps fractional negatives such as -0.5 negative
    let stock = record
        .value_or_zero(&["stock", "Stock"])
        .and_then(RawValue::as_f64)
        .unwrap_or(0.0)
        .floor() as i64;

    let props = NewProductProps {
        sku: Sku::new(text(&["sku", "SKU", "Sku"])),
        name: text(&["name", "Name", "NAME"]),
        stock,
        cost_price: number(&["costPrice", "CostPrice"]),
        current_price: number(&["currentPrice", "CurrentPrice"]),
        sales_qty: number(&["salesQty", "SalesQty"]) as i64,
        abc_margin: AbcClass::parse_lenient(&text(&["abcMargin", "AbcMargin"])),
        margin_total: number(&["marginTotal", "MarginTotal"]),
        source_status: text(&["sourceStatus", "SourceStatus"]),
    };

    Product::new(props).map_err(|e| match e {
        ProductError::NegativeStock => SkipReason::NegativeStock,
        _ => SkipReason::MissingSkuOrName,
    })
}
