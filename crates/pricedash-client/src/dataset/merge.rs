use tracing::debug;

use super::{DatasetRow, PriceTable, UnifiedDataset};

/// Concatenates two batches, `first` then `second`, renumbering rows from 0.
///
/// Columns are the union in order of first appearance. Nothing is
/// deduplicated or filtered.
pub fn merge_tables(first: PriceTable, second: PriceTable) -> UnifiedDataset {
    let mut columns = first.columns.clone();
    for column in &second.columns {
        if !columns.contains(column) {
            columns.push(column.clone());
        }
    }

    let rows = [first, second]
        .into_iter()
        .flat_map(|table| {
            let source = table.source;
            table
                .records
                .into_iter()
                .map(move |record| (source, record))
        })
        .enumerate()
        .map(|(index, (source, record))| DatasetRow {
            index,
            source,
            record,
        })
        .collect::<Vec<DatasetRow>>();

    debug!(rows = rows.len(), columns = columns.len(), "merged price batches");

    UnifiedDataset { columns, rows }
}
