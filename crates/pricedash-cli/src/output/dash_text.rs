use std::io;

use serde_json::Value;

use super::boxplot_text::render_box_plot;
use super::format::{self, Column, format_optional_number};

pub fn render_dash(data: &Value) -> io::Result<String> {
    let status = data
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("dash output requires status"))?;
    let uploads = data
        .get("uploads")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("dash output requires uploads"))?;

    match status {
        "placeholder" => Ok(render_placeholder(data, uploads)),
        "ready" => render_ready(data, uploads),
        other => Err(io::Error::other(format!("unsupported dash status `{other}`"))),
    }
}

fn render_placeholder(data: &Value, uploads: &[Value]) -> String {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Upload both CSV files to start the analysis.");

    let mut lines = vec![message.to_string(), String::new(), "Uploads:".to_string()];
    lines.extend(render_uploads(uploads));
    lines.push(String::new());
    lines.push("What to do next:".to_string());
    lines.push("  1. pricedash dash --vendors <path> --sellers <path>".to_string());
    lines.push("  2. Run `pricedash dash --help` for the expected file layout.".to_string());
    lines.join("\n")
}

fn render_ready(data: &Value, uploads: &[Value]) -> io::Result<String> {
    let selection = data
        .get("selection")
        .ok_or_else(|| io::Error::other("dash output requires selection"))?;
    let items = string_list(selection.get("items"));

    let mut lines = vec!["Uploads:".to_string()];
    lines.extend(render_uploads(uploads));
    lines.push(String::new());

    let Some(analysis) = data.get("analysis").filter(|value| value.is_object()) else {
        lines.push("No items found in the uploaded files.".to_string());
        return Ok(lines.join("\n"));
    };

    let item = analysis.get("item").and_then(Value::as_str).unwrap_or("");
    lines.push(render_selection(&items, item));
    if !selection
        .get("matched")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        lines.push(format!("  `{item}` does not appear in either file."));
    }
    lines.push(String::new());
    lines.push(format!("Price analysis for: {item}"));
    lines.push(String::new());

    lines.push("Price distribution by date:".to_string());
    let groups = analysis
        .get("box_plot")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    lines.extend(render_box_plot(&groups));
    lines.push(String::new());

    lines.push("Summary statistics:".to_string());
    lines.extend(render_statistics(analysis.get("statistics")));
    lines.push(String::new());

    lines.push("Detailed data:".to_string());
    lines.extend(render_details(analysis.get("details")));

    Ok(lines.join("\n"))
}

fn render_uploads(uploads: &[Value]) -> Vec<String> {
    let columns = [
        Column::left("Source"),
        Column::left("File"),
        Column::left("Batch date"),
        Column::right("Rows"),
    ];
    let rows = uploads
        .iter()
        .map(|slot| {
            vec![
                text(slot, "source"),
                slot.get("file_name")
                    .and_then(Value::as_str)
                    .unwrap_or("(not uploaded)")
                    .to_string(),
                text(slot, "batch_date"),
                slot.get("rows")
                    .and_then(Value::as_u64)
                    .map(|count| count.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect::<Vec<Vec<String>>>();
    format::render_table_or_blocks(&columns, &rows, format::terminal_width(), "Upload")
}

fn render_selection(items: &[String], selected: &str) -> String {
    let listed = items
        .iter()
        .map(|item| {
            if item == selected {
                format!("[{item}]")
            } else {
                item.clone()
            }
        })
        .collect::<Vec<String>>()
        .join(", ");
    format!("Items ({}): {listed}", items.len())
}

fn render_statistics(statistics: Option<&Value>) -> Vec<String> {
    let dates = string_list(statistics.and_then(|value| value.get("dates")));
    let rows = statistics
        .and_then(|value| value.get("rows"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if dates.is_empty() || rows.is_empty() {
        return vec!["  No rows for this item.".to_string()];
    }

    let mut columns = vec![Column::left("Statistic")];
    columns.extend(dates.iter().map(|date| Column::right(date)));

    let table_rows = rows
        .iter()
        .map(|row| {
            let mut cells = vec![text(row, "statistic")];
            let values = row
                .get("values")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            cells.extend(
                values
                    .iter()
                    .map(|value| format_optional_number(value.as_f64())),
            );
            cells
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Statistic")
}

fn render_details(details: Option<&Value>) -> Vec<String> {
    let rows = details
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if rows.is_empty() {
        return vec!["  No rows for this item.".to_string()];
    }

    let columns = [
        Column::right("#"),
        Column::left("date"),
        Column::left("vendor"),
        Column::left("store name"),
        Column::right("amount"),
        Column::right("value"),
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("index")
                    .and_then(Value::as_u64)
                    .map(|index| index.to_string())
                    .unwrap_or_default(),
                text(row, "date"),
                text(row, "vendor"),
                text(row, "store name"),
                text(row, "amount"),
                format_optional_number(row.get("value").and_then(Value::as_f64)),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    format::render_table_or_blocks(&columns, &table_rows, format::terminal_width(), "Row")
}

fn text(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
