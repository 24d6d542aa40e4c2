use std::io;

use pricedash_client::contracts::envelope::failure_from_error;
use pricedash_client::{ClientError, SuccessEnvelope};
use serde::Serialize;

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    match success.command.as_str() {
        "dash" | "items" => serialize_json_pretty(success),
        // Bare spec so it can be piped straight into Vega tooling.
        "chart" => serialize_json_pretty(&success.data),
        _ => Err(io::Error::other(format!(
            "JSON output is not supported for command `{}`",
            success.command
        ))),
    }
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    serialize_json_pretty(&failure_from_error(error))
}

fn serialize_json_pretty<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use pricedash_client::ClientError;
    use pricedash_client::contracts::envelope::success;
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    fn parse(body: &str) -> Value {
        serde_json::from_str::<Value>(body).unwrap_or(Value::Null)
    }

    #[test]
    fn dash_json_keeps_the_full_envelope() {
        let envelope = success("dash", json!({ "status": "placeholder" }));
        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            let rendered = render_success_json(&value);
            assert!(rendered.is_ok());
            if let Ok(body) = rendered {
                let payload = parse(&body);
                assert_eq!(payload["ok"], true);
                assert_eq!(payload["command"], "dash");
                assert_eq!(payload["data"]["status"], "placeholder");
            }
        }
    }

    #[test]
    fn chart_json_is_the_bare_spec() {
        let envelope = success("chart", json!({ "mark": "boxplot" }));
        assert!(envelope.is_ok());
        if let Ok(value) = envelope {
            let rendered = render_success_json(&value);
            assert!(rendered.is_ok());
            if let Ok(body) = rendered {
                assert_eq!(parse(&body), json!({ "mark": "boxplot" }));
            }
        }
    }

    #[test]
    fn error_json_carries_code_message_and_recovery_steps() {
        let rendered = render_error_json(&ClientError::invalid_value("abc", "bad"));
        assert!(rendered.is_ok());
        if let Ok(body) = rendered {
            let payload = parse(&body);
            assert_eq!(payload["ok"], false);
            assert_eq!(payload["error"]["code"], "invalid_value");
            assert!(payload["error"]["message"].is_string());
            assert!(payload["error"]["recovery_steps"].is_array());
            assert_eq!(payload["data"]["raw_value"], "abc");
        }
    }
}
