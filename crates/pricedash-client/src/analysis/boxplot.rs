use std::collections::BTreeMap;

use super::filter::ItemSubset;
use super::stats::{quantile, sorted_values};
use crate::contracts::types::BoxPlotGroup;

/// Whiskers reach at most this many interquartile ranges past the box.
pub const WHISKER_EXTENT: f64 = 1.5;

/// One Tukey box per date label, ordered by label. Labels whose rows carry
/// no value are left out.
pub fn box_plot(subset: &ItemSubset) -> Vec<BoxPlotGroup> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in &subset.rows {
        if let Some(value) = row.record.value {
            groups.entry(row.date_label.as_str()).or_default().push(value);
        }
    }

    groups
        .into_iter()
        .filter_map(|(label, values)| box_for(label, &values))
        .collect()
}

fn box_for(label: &str, values: &[f64]) -> Option<BoxPlotGroup> {
    let sorted = sorted_values(values);
    let q1 = quantile(&sorted, 0.25)?;
    let median = quantile(&sorted, 0.5)?;
    let q3 = quantile(&sorted, 0.75)?;
    let reach = (q3 - q1) * WHISKER_EXTENT;
    let (low_fence, high_fence) = (q1 - reach, q3 + reach);

    let inside = sorted
        .iter()
        .copied()
        .filter(|value| *value >= low_fence && *value <= high_fence)
        .collect::<Vec<f64>>();
    let outliers = sorted
        .iter()
        .copied()
        .filter(|value| *value < low_fence || *value > high_fence)
        .collect::<Vec<f64>>();

    Some(BoxPlotGroup {
        date_label: label.to_string(),
        count: sorted.len(),
        lower_whisker: inside.first().copied().unwrap_or(q1),
        q1,
        median,
        q3,
        upper_whisker: inside.last().copied().unwrap_or(q3),
        outliers,
    })
}
