use crate::{ClientError, ClientResult};

/// A price cell as it arrives from a source file.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Cells that already read as a finite number are numeric; anything else
    /// is kept as text for [`normalize_value`] to clean up.
    pub fn from_cell(cell: &str) -> Self {
        match cell.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Self::Number(number),
            _ => Self::Text(cell.to_string()),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

pub fn normalize_value(raw: &RawValue) -> ClientResult<f64> {
    match raw {
        RawValue::Number(number) => Ok(*number),
        RawValue::Text(text) => parse_price_text(text),
    }
}

fn parse_price_text(text: &str) -> ClientResult<f64> {
    let cleaned = strip_unit_marker(text.trim()).replace(',', "");
    if cleaned.is_empty() {
        return Err(ClientError::invalid_value(text, "no digits left after cleanup"));
    }

    let parsed = cleaned
        .parse::<f64>()
        .map_err(|error| ClientError::invalid_value(text, &error.to_string()))?;
    if !parsed.is_finite() {
        return Err(ClientError::invalid_value(text, "value is not finite"));
    }
    Ok(parsed)
}

/// Drops a trailing ` <unit>` marker such as ` z`. The unit is the last
/// space-separated token and must not contain a digit.
fn strip_unit_marker(text: &str) -> &str {
    let Some((number, unit)) = text.rsplit_once(' ') else {
        return text;
    };
    if unit.is_empty() || unit.chars().any(|ch| ch.is_ascii_digit()) {
        return text;
    }
    number.trim_end()
}
