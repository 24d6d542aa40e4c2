use std::collections::HashMap;

use crate::dataset::ITEM_COLUMN;
use crate::{ClientError, ClientResult};

/// Header-keyed CSV content before any typing is applied.
#[derive(Debug, Clone)]
pub(crate) struct ParsedCsv {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<ParsedRow>,
}

#[derive(Debug, Clone)]
pub(crate) struct ParsedRow {
    pub(crate) row: usize,
    pub(crate) cells: Vec<String>,
}

impl ParsedCsv {
    pub(crate) fn index_by_name(&self) -> HashMap<&str, usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index))
            .collect()
    }
}

impl ParsedRow {
    pub(crate) fn value_for(
        &self,
        index_by_name: &HashMap<&str, usize>,
        field_name: &str,
    ) -> Option<&str> {
        let index = index_by_name.get(field_name)?;
        self.cells.get(*index).map(String::as_str)
    }
}

pub(crate) fn parse_csv(file_name: &str, content: &str) -> ClientResult<ParsedCsv> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if content.trim().is_empty() {
        return Err(ClientError::malformed_file(
            file_name,
            "file is empty; expected a header row",
            None,
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::malformed_file(file_name, "CSV header row is missing or unreadable.", None)
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers.iter().any(|header| header == ITEM_COLUMN) {
        return Err(ClientError::schema_mismatch(
            file_name,
            vec![ITEM_COLUMN.to_string()],
            headers,
        ));
    }

    let mut rows = Vec::new();
    for (row_index, result_row) in reader.records().enumerate() {
        let row = row_index + 1;
        let record = result_row.map_err(|error| {
            ClientError::malformed_file(file_name, &csv_error_detail(&error), Some(row))
        })?;
        // Short rows read as null in their missing trailing columns.
        if record.len() > headers.len() {
            return Err(ClientError::malformed_file(
                file_name,
                &field_count_detail(headers.len(), record.len()),
                Some(row),
            ));
        }

        rows.push(ParsedRow {
            row,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(ParsedCsv { headers, rows })
}

fn field_count_detail(expected: usize, found: usize) -> String {
    format!("expected {expected} fields but found {found}")
}

fn csv_error_detail(error: &csv::Error) -> String {
    match error.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => field_count_detail(*expected_len as usize, *len as usize),
        csv::ErrorKind::Utf8 { .. } => "row is not valid UTF-8".to_string(),
        _ => "row is malformed".to_string(),
    }
}
