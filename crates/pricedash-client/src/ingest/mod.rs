pub(crate) mod parse;
pub mod value;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::dataset::{
    AMOUNT_COLUMN, BONUS_COLUMN, BatchSource, DATE_COLUMN, ITEM_COLUMN, PriceRecord, PriceTable,
    STORE_NAME_COLUMN, VALUE_COLUMN, VENDOR_COLUMN,
};
use crate::{ClientError, ClientResult};

use self::value::{RawValue, normalize_value};

/// An uploaded source file, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
}

impl UploadedFile {
    pub fn new(name: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            content: content.to_string(),
        }
    }

    pub fn read(path: &Path) -> ClientResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|error| ClientError::source_unreadable(path, &error.to_string()))?;
        let name = path
            .file_name()
            .map(|value| value.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, content })
    }
}

/// Reads one uploaded file into a typed table stamped with `batch_date`.
///
/// Any `date` column in the file is replaced by the batch date, `value`
/// cells are normalized when the column exists, and `bonus` is dropped.
pub fn ingest_file(
    file: &UploadedFile,
    batch_date: NaiveDate,
    source: BatchSource,
) -> ClientResult<PriceTable> {
    let parsed = parse::parse_csv(&file.name, &file.content)?;
    let index_by_name = parsed.index_by_name();

    let mut records = Vec::with_capacity(parsed.rows.len());
    for row in &parsed.rows {
        let item = row
            .value_for(&index_by_name, ITEM_COLUMN)
            .unwrap_or_default();
        if item.trim().is_empty() {
            return Err(ClientError::malformed_file(
                &file.name,
                "`item` is blank",
                Some(row.row),
            ));
        }

        let value = match row.value_for(&index_by_name, VALUE_COLUMN) {
            Some(cell) if !is_missing_marker(cell) => Some(
                normalize_value(&RawValue::from_cell(cell))
                    .map_err(|error| error.at_row(&file.name, row.row))?,
            ),
            _ => None,
        };

        let mut extra = BTreeMap::new();
        for (name, cell) in parsed.headers.iter().zip(&row.cells) {
            if !is_typed_column(name) && name != BONUS_COLUMN {
                extra.insert(name.clone(), cell.clone());
            }
        }

        records.push(PriceRecord {
            item: item.to_string(),
            value,
            date: batch_date,
            vendor: optional_cell(row.value_for(&index_by_name, VENDOR_COLUMN)),
            store_name: optional_cell(row.value_for(&index_by_name, STORE_NAME_COLUMN)),
            amount: optional_cell(row.value_for(&index_by_name, AMOUNT_COLUMN)),
            extra,
        });
    }

    let mut columns = parsed
        .headers
        .iter()
        .filter(|name| name.as_str() != BONUS_COLUMN)
        .cloned()
        .collect::<Vec<String>>();
    if !columns.iter().any(|name| name == DATE_COLUMN) {
        columns.push(DATE_COLUMN.to_string());
    }

    info!(
        source = source.as_str(),
        file = %file.name,
        batch_date = %batch_date,
        rows = records.len(),
        "ingested price file"
    );

    Ok(PriceTable {
        source,
        file_name: file.name.clone(),
        batch_date,
        columns,
        records,
    })
}

/// Cells read as a missing price rather than a malformed one.
const MISSING_VALUE_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing_marker(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || MISSING_VALUE_MARKERS.contains(&trimmed)
}

fn is_typed_column(name: &str) -> bool {
    matches!(
        name,
        ITEM_COLUMN
            | VALUE_COLUMN
            | DATE_COLUMN
            | VENDOR_COLUMN
            | STORE_NAME_COLUMN
            | AMOUNT_COLUMN
    )
}

fn optional_cell(cell: Option<&str>) -> Option<String> {
    let value = cell?.trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
