use serde_json::Value;

use super::format::format_number;

const PLOT_WIDTH: usize = 48;

#[derive(Debug, Clone, PartialEq)]
struct BoxGeometry {
    label: String,
    lower_whisker: f64,
    q1: f64,
    median: f64,
    q3: f64,
    upper_whisker: f64,
    outliers: Vec<f64>,
}

/// Draws one horizontal box per date on a shared scale:
/// `+---[==|===]---+  o`.
pub fn render_box_plot(groups: &[Value]) -> Vec<String> {
    let boxes = groups.iter().filter_map(read_geometry).collect::<Vec<_>>();
    if boxes.is_empty() {
        return vec!["  No prices to plot.".to_string()];
    }

    let (low, high) = boxes.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |acc, item| {
        let values = item
            .outliers
            .iter()
            .copied()
            .chain([item.lower_whisker, item.upper_whisker]);
        values.fold(acc, |(low, high), value| (low.min(value), high.max(value)))
    });
    let label_width = boxes.iter().map(|item| item.label.len()).max().unwrap_or(0);

    let mut lines = boxes
        .iter()
        .map(|item| {
            let bar = draw_bar(item, low, high);
            format!(
                "  {:<label_width$}  {bar}  median {}",
                item.label,
                format_number(item.median)
            )
        })
        .collect::<Vec<String>>();

    let low_text = format_number(low);
    let high_text = format_number(high);
    let gap = PLOT_WIDTH.saturating_sub(low_text.len() + high_text.len());
    lines.push(format!(
        "  {:<label_width$}  {low_text}{}{high_text}",
        "",
        " ".repeat(gap)
    ));
    lines
}

fn read_geometry(group: &Value) -> Option<BoxGeometry> {
    let number = |key: &str| group.get(key).and_then(Value::as_f64);
    Some(BoxGeometry {
        label: group.get("date_label")?.as_str()?.to_string(),
        lower_whisker: number("lower_whisker")?,
        q1: number("q1")?,
        median: number("median")?,
        q3: number("q3")?,
        upper_whisker: number("upper_whisker")?,
        outliers: group
            .get("outliers")
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default(),
    })
}

fn draw_bar(item: &BoxGeometry, low: f64, high: f64) -> String {
    let position = |value: f64| -> usize {
        if high <= low {
            return PLOT_WIDTH / 2;
        }
        let scaled = (value - low) / (high - low) * (PLOT_WIDTH - 1) as f64;
        (scaled.round() as usize).min(PLOT_WIDTH - 1)
    };

    let mut cells = vec![' '; PLOT_WIDTH];
    let (whisker_low, box_low) = (position(item.lower_whisker), position(item.q1));
    let (box_high, whisker_high) = (position(item.q3), position(item.upper_whisker));

    for cell in &mut cells[whisker_low..=whisker_high.max(whisker_low)] {
        *cell = '-';
    }
    for cell in &mut cells[box_low..=box_high.max(box_low)] {
        *cell = '=';
    }
    cells[whisker_low] = '+';
    cells[whisker_high] = '+';
    cells[box_low] = '[';
    cells[box_high] = ']';
    cells[position(item.median)] = '|';
    for outlier in &item.outliers {
        cells[position(*outlier)] = 'o';
    }

    cells.into_iter().collect::<String>().trim_end().to_string()
}
