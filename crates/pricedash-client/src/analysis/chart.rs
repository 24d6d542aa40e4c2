use serde_json::{Value, json};

use super::filter::ItemSubset;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Vega-Lite box plot of the subset: nominal date labels on x, prices on y.
pub fn vega_lite_box_plot(subset: &ItemSubset) -> Value {
    let values = subset
        .rows
        .iter()
        .map(|row| {
            json!({
                "date_str": row.date_label,
                "value": row.record.value,
                "vendor": row.record.vendor,
            })
        })
        .collect::<Vec<Value>>();

    json!({
        "$schema": VEGA_LITE_SCHEMA,
        "title": "Price Distribution",
        "width": "container",
        "data": { "values": values },
        "mark": "boxplot",
        "encoding": {
            "x": { "field": "date_str", "type": "nominal", "title": "Date" },
            "y": { "field": "value", "type": "quantitative", "title": "Price" }
        }
    })
}
