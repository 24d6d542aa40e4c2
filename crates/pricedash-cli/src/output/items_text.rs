use std::io;

use serde_json::Value;

pub fn render_items(data: &Value) -> io::Result<String> {
    let ready = data
        .get("ready")
        .and_then(Value::as_bool)
        .ok_or_else(|| io::Error::other("items output requires ready"))?;
    if !ready {
        return Ok([
            "Items are listed once both files are uploaded.",
            "",
            "What to do next:",
            "  1. pricedash items --vendors <path> --sellers <path>",
        ]
        .join("\n"));
    }

    let items = data
        .get("items")
        .and_then(Value::as_array)
        .ok_or_else(|| io::Error::other("items output requires items"))?;
    if items.is_empty() {
        return Ok("No items found in the uploaded files.".to_string());
    }

    let default_item = data.get("default_item").and_then(Value::as_str);
    let mut lines = vec![format!("Items ({}):", items.len())];
    for item in items.iter().filter_map(Value::as_str) {
        if Some(item) == default_item {
            lines.push(format!("  {item}  (default)"));
        } else {
            lines.push(format!("  {item}"));
        }
    }
    lines.push(String::new());
    lines.push("Select one with `pricedash dash --item <item>`.".to_string());
    Ok(lines.join("\n"))
}
