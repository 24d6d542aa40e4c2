use chrono::NaiveDate;

use crate::dataset::merge::merge_tables;
use crate::dataset::{BatchSource, PriceTable, UnifiedDataset};
use crate::ingest::{UploadedFile, ingest_file};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(crate) fn table(name: &str, body: &str, batch_date: NaiveDate, source: BatchSource) -> PriceTable {
    let ingested = ingest_file(&UploadedFile::new(name, body), batch_date, source);
    assert!(ingested.is_ok(), "fixture `{name}` failed to ingest");
    match ingested {
        Ok(table) => table,
        Err(_) => PriceTable {
            source,
            file_name: name.to_string(),
            batch_date,
            columns: Vec::new(),
            records: Vec::new(),
        },
    }
}

/// Vendors dated 2025-08-23 followed by sellers dated 2025-07-24.
pub(crate) fn dataset(vendors: &str, sellers: &str) -> UnifiedDataset {
    merge_tables(
        table("vendors.csv", vendors, date(2025, 8, 23), BatchSource::Vendors),
        table("sellers.csv", sellers, date(2025, 7, 24), BatchSource::Sellers),
    )
}
