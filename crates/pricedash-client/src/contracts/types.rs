use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadSlot {
    pub source: String,
    pub file_name: Option<String>,
    pub batch_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectionData {
    pub items: Vec<String>,
    pub selected: Option<String>,
    pub matched: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatisticRow {
    pub statistic: String,
    pub values: Vec<Option<f64>>,
}

/// Per-date descriptive statistics, statistics as rows and dates as columns.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct StatisticsTable {
    pub dates: Vec<String>,
    pub rows: Vec<StatisticRow>,
}

impl StatisticsTable {
    pub fn row(&self, statistic: &str) -> Option<&StatisticRow> {
        self.rows.iter().find(|row| row.statistic == statistic)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BoxPlotGroup {
    pub date_label: String,
    pub count: usize,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetailRow {
    pub index: usize,
    pub date: String,
    pub vendor: Option<String>,
    #[serde(rename = "store name")]
    pub store_name: Option<String>,
    pub amount: Option<String>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemAnalysis {
    pub item: String,
    pub row_count: usize,
    pub box_plot: Vec<BoxPlotGroup>,
    pub statistics: StatisticsTable,
    pub details: Vec<DetailRow>,
    pub chart: Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardData {
    Placeholder {
        message: String,
        uploads: Vec<UploadSlot>,
    },
    Ready {
        uploads: Vec<UploadSlot>,
        total_rows: usize,
        columns: Vec<String>,
        selection: SelectionData,
        #[serde(skip_serializing_if = "Option::is_none")]
        analysis: Option<ItemAnalysis>,
    },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemsData {
    pub uploads: Vec<UploadSlot>,
    pub ready: bool,
    pub items: Vec<String>,
    pub default_item: Option<String>,
}
