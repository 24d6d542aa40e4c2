pub mod merge;

use std::collections::BTreeMap;

use chrono::NaiveDate;

pub const ITEM_COLUMN: &str = "item";
pub const VALUE_COLUMN: &str = "value";
pub const DATE_COLUMN: &str = "date";
pub const VENDOR_COLUMN: &str = "vendor";
pub const STORE_NAME_COLUMN: &str = "store name";
pub const AMOUNT_COLUMN: &str = "amount";
pub const BONUS_COLUMN: &str = "bonus";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BatchSource {
    Vendors,
    Sellers,
}

impl BatchSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Sellers => "sellers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub item: String,
    pub value: Option<f64>,
    pub date: NaiveDate,
    pub vendor: Option<String>,
    pub store_name: Option<String>,
    pub amount: Option<String>,
    pub extra: BTreeMap<String, String>,
}

#[cfg(test)]
impl PriceRecord {
    /// Reads a column by its header name; `None` when the record has no
    /// value for it.
    pub fn column(&self, name: &str) -> Option<String> {
        match name {
            ITEM_COLUMN => Some(self.item.clone()),
            VALUE_COLUMN => self.value.map(|value| value.to_string()),
            DATE_COLUMN => Some(self.date.format("%Y-%m-%d").to_string()),
            VENDOR_COLUMN => self.vendor.clone(),
            STORE_NAME_COLUMN => self.store_name.clone(),
            AMOUNT_COLUMN => self.amount.clone(),
            other => self.extra.get(other).cloned(),
        }
    }
}

/// One ingested batch.
#[derive(Debug, Clone)]
pub struct PriceTable {
    pub source: BatchSource,
    pub file_name: String,
    pub batch_date: NaiveDate,
    pub columns: Vec<String>,
    pub records: Vec<PriceRecord>,
}

impl PriceTable {
    #[cfg(test)]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub index: usize,
    pub source: BatchSource,
    pub record: PriceRecord,
}

#[derive(Debug, Clone, Default)]
pub struct UnifiedDataset {
    pub columns: Vec<String>,
    pub rows: Vec<DatasetRow>,
}

impl UnifiedDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
