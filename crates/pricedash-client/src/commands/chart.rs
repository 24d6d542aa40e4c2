use serde_json::Value;

use crate::ClientResult;
use crate::commands::common::resolve_inputs;
use crate::commands::dash::DashOptions;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::DashboardData;
use crate::dashboard;

/// Only the Vega-Lite spec of the dashboard's box plot; `null` while the
/// dashboard has nothing to plot.
pub fn run(options: DashOptions) -> ClientResult<SuccessEnvelope> {
    let inputs = resolve_inputs(&options.uploads, options.item)?;
    let chart = match dashboard::build(&inputs)? {
        DashboardData::Ready {
            analysis: Some(analysis),
            ..
        } => analysis.chart,
        _ => Value::Null,
    };
    success("chart", chart)
}
