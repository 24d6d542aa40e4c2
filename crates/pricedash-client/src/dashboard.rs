//! The full pipeline for one interaction: ingest both uploads, merge them,
//! pick an item and aggregate it. Each call starts from the inputs alone.

use chrono::NaiveDate;
use tracing::debug;

use crate::ClientResult;
use crate::analysis::filter::DATE_LABEL_FORMAT;
use crate::analysis::{
    box_plot, default_item, distinct_items, filter_item, summarize_by_date, vega_lite_box_plot,
};
use crate::contracts::types::{DashboardData, ItemAnalysis, ItemsData, SelectionData, UploadSlot};
use crate::dataset::merge::merge_tables;
use crate::dataset::{BatchSource, PriceTable, UnifiedDataset};
use crate::ingest::{UploadedFile, ingest_file};

pub const PLACEHOLDER_MESSAGE: &str =
    "Upload both the vendors and the sellers CSV files to start the analysis.";

pub fn default_vendors_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 23).unwrap_or_default()
}

pub fn default_sellers_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 24).unwrap_or_default()
}

/// Snapshot of every user input for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardInputs {
    pub vendors: Option<UploadedFile>,
    pub vendors_date: NaiveDate,
    pub sellers: Option<UploadedFile>,
    pub sellers_date: NaiveDate,
    pub item: Option<String>,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            vendors: None,
            vendors_date: default_vendors_date(),
            sellers: None,
            sellers_date: default_sellers_date(),
            item: None,
        }
    }
}

struct Loaded {
    uploads: Vec<UploadSlot>,
    dataset: UnifiedDataset,
}

pub fn build(inputs: &DashboardInputs) -> ClientResult<DashboardData> {
    let Some(loaded) = load(inputs)? else {
        return Ok(DashboardData::Placeholder {
            message: PLACEHOLDER_MESSAGE.to_string(),
            uploads: pending_slots(inputs),
        });
    };

    let items = distinct_items(&loaded.dataset);
    let selected = inputs
        .item
        .clone()
        .or_else(|| default_item(&items).map(str::to_string));
    let matched = selected
        .as_ref()
        .map(|item| items.contains(item))
        .unwrap_or(false);

    let analysis = selected.as_ref().map(|item| {
        let subset = filter_item(&loaded.dataset, item);
        debug!(item = %item, rows = subset.rows.len(), "building item analysis");
        ItemAnalysis {
            item: item.clone(),
            row_count: subset.rows.len(),
            box_plot: box_plot(&subset),
            statistics: summarize_by_date(&subset),
            details: subset.detail_rows(),
            chart: vega_lite_box_plot(&subset),
        }
    });

    Ok(DashboardData::Ready {
        uploads: loaded.uploads,
        total_rows: loaded.dataset.len(),
        columns: loaded.dataset.columns,
        selection: SelectionData {
            items,
            selected,
            matched,
        },
        analysis,
    })
}

pub fn items(inputs: &DashboardInputs) -> ClientResult<ItemsData> {
    let Some(loaded) = load(inputs)? else {
        return Ok(ItemsData {
            uploads: pending_slots(inputs),
            ready: false,
            items: Vec::new(),
            default_item: None,
        });
    };

    let items = distinct_items(&loaded.dataset);
    Ok(ItemsData {
        uploads: loaded.uploads,
        ready: true,
        default_item: default_item(&items).map(str::to_string),
        items,
    })
}

/// `None` until both uploads are present; nothing is parsed before that.
fn load(inputs: &DashboardInputs) -> ClientResult<Option<Loaded>> {
    let (Some(vendors), Some(sellers)) = (&inputs.vendors, &inputs.sellers) else {
        debug!("waiting for both uploads");
        return Ok(None);
    };

    let vendors_table = ingest_file(vendors, inputs.vendors_date, BatchSource::Vendors)?;
    let sellers_table = ingest_file(sellers, inputs.sellers_date, BatchSource::Sellers)?;
    let uploads = vec![table_slot(&vendors_table), table_slot(&sellers_table)];

    Ok(Some(Loaded {
        uploads,
        dataset: merge_tables(vendors_table, sellers_table),
    }))
}

fn pending_slots(inputs: &DashboardInputs) -> Vec<UploadSlot> {
    let pending = |source: BatchSource, file: Option<&UploadedFile>, batch_date: NaiveDate| {
        UploadSlot {
            source: source.as_str().to_string(),
            file_name: file.map(|value| value.name.clone()),
            batch_date: batch_date.format(DATE_LABEL_FORMAT).to_string(),
            rows: None,
        }
    };

    vec![
        pending(BatchSource::Vendors, inputs.vendors.as_ref(), inputs.vendors_date),
        pending(BatchSource::Sellers, inputs.sellers.as_ref(), inputs.sellers_date),
    ]
}

fn table_slot(table: &PriceTable) -> UploadSlot {
    UploadSlot {
        source: table.source.as_str().to_string(),
        file_name: Some(table.file_name.clone()),
        batch_date: table.batch_date.format(DATE_LABEL_FORMAT).to_string(),
        rows: Some(table.len()),
    }
}
