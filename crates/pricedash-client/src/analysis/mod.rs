//! Item selection, filtering and per-date aggregation over a unified dataset.

pub mod boxplot;
pub mod chart;
pub mod filter;
pub mod items;
pub mod stats;

pub use boxplot::box_plot;
pub use chart::vega_lite_box_plot;
pub use filter::{ItemSubset, SubsetRow, filter_item};
pub use items::{default_item, distinct_items};
pub use stats::{DescriptiveStats, describe, summarize_by_date};
