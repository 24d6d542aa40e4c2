use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

pub(crate) const DASH_HELP_COMMAND: &str = "pricedash dash --help";

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `pricedash {cmd} --help` for usage."),
            None => "Run `pricedash --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn source_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "source_unreadable",
            &format!("Could not read price file `{location}`: {detail}"),
            vec![
                "Verify the path exists and is readable.".to_string(),
                format!("Run `{DASH_HELP_COMMAND}` to review the upload flags."),
            ],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn malformed_file(file_name: &str, message: &str, row: Option<usize>) -> Self {
        let details = match row {
            Some(row_number) => format!("`{file_name}` row {row_number}: {message}"),
            None => format!("`{file_name}`: {message}"),
        };
        Self::new(
            "malformed_file",
            &details,
            vec![
                "Export the file again as comma-separated text with one header row.".to_string(),
                "Make sure every row has the same number of fields as the header.".to_string(),
            ],
        )
        .with_data(json!({
            "file": file_name,
            "row": row,
        }))
    }

    pub fn schema_mismatch(
        file_name: &str,
        required_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "schema_mismatch",
            &format!("CSV headers in `{file_name}` do not include every required column."),
            vec![
                "Include an `item` header; `value`, `vendor`, `store name` and `amount` are optional."
                    .to_string(),
                format!("Run `{DASH_HELP_COMMAND}` to review the expected file layout."),
            ],
        )
        .with_data(json!({
            "file": file_name,
            "required_headers": required_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn invalid_value(raw: &str, detail: &str) -> Self {
        Self::new(
            "invalid_value",
            &format!("Price value `{raw}` is not a number: {detail}"),
            vec![
                "Use plain numbers (`1234.5`) or numbers with a unit suffix (`1,234.50 z`)."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "raw_value": raw,
        }))
    }

    /// Attaches the file and row a value failure came from.
    pub fn at_row(mut self, file_name: &str, row: usize) -> Self {
        self.message = format!("`{file_name}` row {row}: {}", self.message);
        let mut data = match self.data.take() {
            Some(Value::Object(object)) => object,
            _ => serde_json::Map::new(),
        };
        data.insert("file".to_string(), Value::String(file_name.to_string()));
        data.insert("row".to_string(), json!(row));
        self.data = Some(Value::Object(data));
        self
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
