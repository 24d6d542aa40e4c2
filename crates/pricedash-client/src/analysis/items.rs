use std::collections::BTreeSet;

use crate::dataset::UnifiedDataset;

/// Unique item keys in ascending order.
pub fn distinct_items(dataset: &UnifiedDataset) -> Vec<String> {
    dataset
        .rows
        .iter()
        .map(|row| row.record.item.as_str())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn default_item(items: &[String]) -> Option<&str> {
    items.first().map(String::as_str)
}
