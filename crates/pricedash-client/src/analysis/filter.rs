use tracing::warn;

use crate::contracts::types::DetailRow;
use crate::dataset::{BatchSource, PriceRecord, UnifiedDataset};

pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct SubsetRow {
    pub index: usize,
    pub source: BatchSource,
    pub date_label: String,
    pub record: PriceRecord,
}

/// Rows for one item, copied out of the unified dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSubset {
    pub item: String,
    pub rows: Vec<SubsetRow>,
}

impl ItemSubset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[cfg(test)]
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.record.value).collect()
    }

    /// Detail table rows: date, vendor, store name, amount, value.
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        self.rows
            .iter()
            .map(|row| DetailRow {
                index: row.index,
                date: row.date_label.clone(),
                vendor: row.record.vendor.clone(),
                store_name: row.record.store_name.clone(),
                amount: row.record.amount.clone(),
                value: row.record.value,
            })
            .collect()
    }
}

pub fn filter_item(dataset: &UnifiedDataset, item: &str) -> ItemSubset {
    let rows = dataset
        .rows
        .iter()
        .filter(|row| row.record.item == item)
        .map(|row| SubsetRow {
            index: row.index,
            source: row.source,
            date_label: row.record.date.format(DATE_LABEL_FORMAT).to_string(),
            record: row.record.clone(),
        })
        .collect::<Vec<SubsetRow>>();

    if rows.is_empty() {
        warn!(item, "selected item matches no rows");
    }

    ItemSubset {
        item: item.to_string(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::filter_item;
    use crate::dataset::BatchSource;
    use crate::testkit::dataset;

    #[test]
    fn keeps_only_rows_for_the_selected_item_with_original_indices() {
        let merged = dataset(
            "item,value,vendor\nPotion,\"10,000 z\",X\nSword,5,X\n",
            "item,value,vendor\nPotion,12000,Y\n",
        );
        let subset = filter_item(&merged, "Potion");

        assert_eq!(subset.rows.len(), 2);
        assert!(subset.rows.iter().all(|row| row.record.item == "Potion"));
        let indices = subset.rows.iter().map(|row| row.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(subset.rows[1].source, BatchSource::Sellers);
        assert_eq!(subset.values(), vec![10000.0, 12000.0]);
    }

    #[test]
    fn labels_each_row_with_its_batch_date() {
        let merged = dataset("item,value\nPotion,1\n", "item,value\nPotion,2\n");
        let subset = filter_item(&merged, "Potion");
        let labels = subset
            .rows
            .iter()
            .map(|row| row.date_label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["2025-08-23", "2025-07-24"]);
    }

    #[test]
    fn subset_is_independent_of_the_dataset() {
        let merged = dataset("item,value\nPotion,1\n", "item,value\n");
        let mut subset = filter_item(&merged, "Potion");
        subset.rows[0].record.value = Some(99.0);
        subset.rows[0].record.item = "Changed".to_string();

        assert_eq!(merged.rows[0].record.value, Some(1.0));
        assert_eq!(merged.rows[0].record.item, "Potion");
    }

    #[test]
    fn unknown_item_yields_an_empty_subset() {
        let merged = dataset("item,value\nPotion,1\n", "item,value\n");
        let subset = filter_item(&merged, "Missing");
        assert!(subset.is_empty());
        assert!(subset.detail_rows().is_empty());
    }

    #[test]
    fn detail_rows_carry_the_display_columns() {
        let merged = dataset(
            "item,value,vendor,store name,amount,refine\nPotion,\"1,500 z\",Ann,Ann's Shop,3,+7\n",
            "item,value\n",
        );
        let details = filter_item(&merged, "Potion").detail_rows();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].index, 0);
        assert_eq!(details[0].date, "2025-08-23");
        assert_eq!(details[0].vendor.as_deref(), Some("Ann"));
        assert_eq!(details[0].store_name.as_deref(), Some("Ann's Shop"));
        assert_eq!(details[0].amount.as_deref(), Some("3"));
        assert_eq!(details[0].value, Some(1500.0));
    }
}
