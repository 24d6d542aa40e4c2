use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::filter::ItemSubset;
use crate::contracts::types::{StatisticRow, StatisticsTable};

pub const STATISTIC_NAMES: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl DescriptiveStats {
    fn by_name(&self, name: &str) -> Option<f64> {
        match name {
            "count" => Some(self.count as f64),
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.q50,
            "75%" => self.q75,
            "max" => self.max,
            _ => None,
        }
    }
}

/// Count, mean, sample standard deviation, min, quartiles and max.
///
/// `std` needs at least two values; everything but `count` is `None` for an
/// empty input.
pub fn describe(values: &[f64]) -> DescriptiveStats {
    let sorted = sorted_values(values);
    let count = sorted.len();
    if count == 0 {
        return DescriptiveStats {
            count,
            mean: None,
            std: None,
            min: None,
            q25: None,
            q50: None,
            q75: None,
            max: None,
        };
    }

    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        None
    } else {
        let squared = sorted
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>();
        Some((squared / (count - 1) as f64).sqrt())
    };

    DescriptiveStats {
        count,
        mean: Some(mean),
        std,
        min: sorted.first().copied(),
        q25: quantile(&sorted, 0.25),
        q50: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

/// Linear interpolation between the closest ranks of an ascending slice.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

pub(crate) fn sorted_values(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Groups the subset by batch date and lays the statistics out with one
/// row per statistic and one column per date.
pub fn summarize_by_date(subset: &ItemSubset) -> StatisticsTable {
    let mut groups: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for row in &subset.rows {
        let values = groups.entry(row.record.date).or_default();
        if let Some(value) = row.record.value {
            values.push(value);
        }
    }

    let described = groups
        .into_iter()
        .map(|(date, values)| (date, describe(&values)))
        .collect::<Vec<(NaiveDate, DescriptiveStats)>>();

    debug!(item = %subset.item, dates = described.len(), "summarized item by date");

    StatisticsTable {
        dates: described
            .iter()
            .map(|(date, _)| date.format("%Y-%m-%d").to_string())
            .collect(),
        rows: if described.is_empty() {
            Vec::new()
        } else {
            STATISTIC_NAMES
                .iter()
                .map(|name| StatisticRow {
                    statistic: (*name).to_string(),
                    values: described
                        .iter()
                        .map(|(_, stats)| stats.by_name(name))
                        .collect(),
                })
                .collect()
        },
    }
}
