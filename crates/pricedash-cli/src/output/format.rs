use std::cmp;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

impl<'a> Column<'a> {
    pub const fn left(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Left,
        }
    }

    pub const fn right(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Right,
        }
    }
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 6;

pub fn terminal_width() -> usize {
    let from_env = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(120);
    cmp::max(from_env, 40)
}

/// Prices and statistics: integers without a fraction, otherwise at most
/// two decimals with trailing zeros dropped.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn format_optional_number(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_default()
}

/// Renders an aligned table, or one labelled block per row when the
/// columns cannot fit in `max_width`.
pub fn render_table_or_blocks(
    columns: &[Column<'_>],
    rows: &[Vec<String>],
    max_width: usize,
    block_label: &str,
) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let Some(widths) = fitted_widths(columns, rows, max_width) else {
        return render_blocks(columns, rows, block_label);
    };

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    let mut output = vec![format_line(columns, &header, &widths)];

    for row in rows {
        let wrapped = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                chunk_chars(row.get(index).map(String::as_str).unwrap_or(""), *width)
            })
            .collect::<Vec<Vec<String>>>();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

        for line in 0..height {
            let cells = wrapped
                .iter()
                .map(|chunks| chunks.get(line).cloned().unwrap_or_default())
                .collect::<Vec<String>>();
            output.push(format_line(columns, &cells, &widths));
        }
    }

    output
}

fn fitted_widths(columns: &[Column<'_>], rows: &[Vec<String>], max_width: usize) -> Option<Vec<usize>> {
    let mut widths = columns
        .iter()
        .map(|column| column.name.chars().count())
        .collect::<Vec<usize>>();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = cmp::max(*width, cell.chars().count());
        }
    }

    let floors = columns
        .iter()
        .map(|column| cmp::max(column.name.chars().count(), MIN_COLUMN_WIDTH))
        .collect::<Vec<usize>>();
    let budget = max_width
        .saturating_sub(INDENT)
        .saturating_sub(COLUMN_GAP * columns.len().saturating_sub(1));

    // Shrink the widest column that is still above its floor.
    while widths.iter().sum::<usize>() > budget {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > floors[*index])
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index)?;
        widths[candidate] -= 1;
    }

    Some(widths)
}

fn format_line(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (column, width))| {
            let value = cells.get(index).map(String::as_str).unwrap_or("");
            let padding = " ".repeat(width.saturating_sub(value.chars().count()));
            match column.align {
                Align::Left => format!("{value}{padding}"),
                Align::Right => format!("{padding}{value}"),
            }
        })
        .collect::<Vec<String>>();

    format!("{}{}", " ".repeat(INDENT), pieces.join(&" ".repeat(COLUMN_GAP)))
        .trim_end()
        .to_string()
}

fn chunk_chars(value: &str, width: usize) -> Vec<String> {
    if width == 0 || value.chars().count() <= width {
        return vec![value.to_string()];
    }
    value
        .chars()
        .collect::<Vec<char>>()
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn render_blocks(columns: &[Column<'_>], rows: &[Vec<String>], block_label: &str) -> Vec<String> {
    let label_width = columns
        .iter()
        .map(|column| column.name.chars().count() + 1)
        .max()
        .unwrap_or(0);

    let mut output = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        if row_index > 0 {
            output.push(String::new());
        }
        output.push(format!("  {block_label} {}:", row_index + 1));
        for (column_index, column) in columns.iter().enumerate() {
            let label = format!("{}:", column.name);
            let value = row.get(column_index).map(String::as_str).unwrap_or("");
            output.push(format!("    {label:<label_width$}  {value}").trim_end().to_string());
        }
    }

    output
}
