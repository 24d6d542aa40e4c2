use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

const EXPECTED_ROOT_HELP: &str = "pricedash - item price dashboard for vendor and seller exports

Usage:
  pricedash <command>

Start here:
  pricedash dash --help
  pricedash items --vendors <path> --sellers <path>
  pricedash dash --vendors <path> --sellers <path> --item <item>
";

const VENDORS_CSV: &str = "\
item,value,vendor,store name,amount,bonus
Red Potion,\"1,250 z\",Ann,Ann's Corner,10,+1
Red Potion,\"1,300 z\",Bob,Bob's Stall,4,
Blue Gem,\"52,000 z\",Ann,Ann's Corner,1,
";

const SELLERS_CSV: &str = "\
item,value,vendor,store name,amount
Red Potion,1100,Cid,Cid's Cart,7
Red Potion,1150,Dee,Dee's Den,2
";

static TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

fn unique_test_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    let stamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(value) => value.as_nanos(),
        Err(_) => 0,
    };
    let sequence = TEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!(
        "pricedash-cli-test-{}-{stamp}-{sequence}",
        std::process::id()
    ));
    let created = fs::create_dir_all(&path);
    assert!(created.is_ok());
    path
}

fn write_file(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    let written = fs::write(&path, body);
    assert!(written.is_ok());
    path.to_string_lossy().to_string()
}

fn run_cli(args: &[&str]) -> (Option<i32>, String) {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pricedash"));
    for arg in args {
        command.arg(arg);
    }
    command.env("COLUMNS", "120");
    command.env_remove("PRICEDASH_LOG");
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output();
    assert!(output.is_ok());
    if let Ok(result) = output {
        let stdout = String::from_utf8(result.stdout);
        assert!(stdout.is_ok());
        if let Ok(stdout_text) = stdout {
            return (result.status.code(), stdout_text);
        }
    }

    (None, String::new())
}

fn parse_json(body: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(body);
    assert!(parsed.is_ok(), "expected JSON output, got: {body}");
    parsed.unwrap_or(Value::Null)
}

fn upload_fixture() -> (PathBuf, String, String) {
    let dir = unique_test_dir();
    let vendors = write_file(&dir, "vendors.csv", VENDORS_CSV);
    let sellers = write_file(&dir, "sellers.csv", SELLERS_CSV);
    (dir, vendors, sellers)
}

#[test]
fn bare_invocation_prints_root_help() {
    let (code, body) = run_cli(&[]);
    assert_eq!(code, Some(0));
    assert_eq!(body, EXPECTED_ROOT_HELP);
}

#[test]
fn dash_help_documents_the_file_layout() {
    let (code, body) = run_cli(&["dash", "--help"]);
    assert_eq!(code, Some(0));
    assert!(body.contains("File layout (CSV, one header row):"));
    assert!(body.contains("--vendors-date <DATE>"));
}

#[test]
fn dash_without_uploads_shows_placeholder() {
    let (code, body) = run_cli(&["dash"]);
    assert_eq!(code, Some(0));
    assert!(body.starts_with("Upload both the vendors and the sellers CSV files"));
    assert!(body.contains("(not uploaded)"));
}

#[test]
fn dash_with_one_upload_is_still_a_placeholder_in_json() {
    let (dir, vendors, _) = upload_fixture();
    let (code, body) = run_cli(&["dash", "--vendors", &vendors, "--json"]);
    assert_eq!(code, Some(0));

    let payload = parse_json(&body);
    assert_eq!(payload["ok"], true);
    assert_eq!(payload["command"], "dash");
    assert_eq!(payload["data"]["status"], "placeholder");
    assert_eq!(payload["data"]["uploads"][0]["file_name"], "vendors.csv");
    assert_eq!(payload["data"]["uploads"][1]["file_name"], Value::Null);
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn dash_json_reports_selection_statistics_and_details() {
    let (dir, vendors, sellers) = upload_fixture();
    let (code, body) = run_cli(&[
        "dash",
        "--vendors",
        &vendors,
        "--sellers",
        &sellers,
        "--item",
        "Red Potion",
        "--json",
    ]);
    assert_eq!(code, Some(0));

    let payload = parse_json(&body);
    let data = &payload["data"];
    assert_eq!(data["status"], "ready");
    assert_eq!(data["total_rows"], 5);
    assert_eq!(
        data["selection"]["items"],
        serde_json::json!(["Blue Gem", "Red Potion"])
    );
    assert_eq!(data["selection"]["matched"], true);

    let analysis = &data["analysis"];
    assert_eq!(analysis["row_count"], 4);
    assert_eq!(
        analysis["statistics"]["dates"],
        serde_json::json!(["2025-07-24", "2025-08-23"])
    );
    assert_eq!(analysis["statistics"]["rows"][1]["statistic"], "mean");
    assert_eq!(
        analysis["statistics"]["rows"][1]["values"],
        serde_json::json!([1125.0, 1275.0])
    );
    assert_eq!(analysis["details"][0]["value"], 1250.0);
    assert_eq!(analysis["details"][2]["index"], 3);
    assert_eq!(analysis["details"][2]["vendor"], "Cid");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn dash_text_defaults_to_the_first_sorted_item() {
    let (dir, vendors, sellers) = upload_fixture();
    let (code, body) = run_cli(&["dash", "--vendors", &vendors, "--sellers", &sellers]);
    assert_eq!(code, Some(0));
    assert!(body.contains("Items (2): [Blue Gem], Red Potion"));
    assert!(body.contains("Price analysis for: Blue Gem"));
    assert!(body.contains("Summary statistics:"));
    assert!(body.contains("Detailed data:"));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn items_lists_distinct_items_in_sorted_order() {
    let (dir, vendors, sellers) = upload_fixture();
    let (code, body) = run_cli(&["items", "--vendors", &vendors, "--sellers", &sellers, "--json"]);
    assert_eq!(code, Some(0));

    let payload = parse_json(&body);
    assert_eq!(payload["command"], "items");
    assert_eq!(payload["data"]["ready"], true);
    assert_eq!(
        payload["data"]["items"],
        serde_json::json!(["Blue Gem", "Red Potion"])
    );
    assert_eq!(payload["data"]["default_item"], "Blue Gem");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn chart_prints_a_bare_vega_lite_spec() {
    let (dir, vendors, sellers) = upload_fixture();
    let (code, body) = run_cli(&[
        "chart",
        "--vendors",
        &vendors,
        "--sellers",
        &sellers,
        "--item",
        "Red Potion",
    ]);
    assert_eq!(code, Some(0));

    let spec = parse_json(&body);
    assert!(spec.get("ok").is_none());
    assert_eq!(spec["mark"], "boxplot");
    assert_eq!(spec["title"], "Price Distribution");
    assert_eq!(spec["data"]["values"].as_array().map(Vec::len), Some(4));
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unparseable_value_fails_with_invalid_value() {
    let dir = unique_test_dir();
    let vendors = write_file(&dir, "vendors.csv", "item,value\nRed Potion,abc\n");
    let sellers = write_file(&dir, "sellers.csv", SELLERS_CSV);

    let (code, body) = run_cli(&["dash", "--vendors", &vendors, "--sellers", &sellers]);
    assert_eq!(code, Some(1));
    assert!(body.starts_with("The dashboard could not be built."));
    assert!(body.contains("  Error:    invalid_value"));
    assert!(body.contains("`vendors.csv` row 1: Price value `abc`"));

    let (json_code, json_body) = run_cli(&[
        "dash",
        "--vendors",
        &vendors,
        "--sellers",
        &sellers,
        "--json",
    ]);
    assert_eq!(json_code, Some(1));
    let payload = parse_json(&json_body);
    assert_eq!(payload["ok"], false);
    assert_eq!(payload["error"]["code"], "invalid_value");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn missing_item_column_fails_with_schema_mismatch() {
    let dir = unique_test_dir();
    let vendors = write_file(&dir, "vendors.csv", "name,value\nRed Potion,10\n");
    let sellers = write_file(&dir, "sellers.csv", SELLERS_CSV);

    let (code, body) = run_cli(&[
        "items",
        "--vendors",
        &vendors,
        "--sellers",
        &sellers,
        "--json",
    ]);
    assert_eq!(code, Some(1));
    let payload = parse_json(&body);
    assert_eq!(payload["error"]["code"], "schema_mismatch");
    let _ = fs::remove_dir_all(dir);
}

#[test]
fn bad_batch_date_is_an_invalid_argument() {
    let (code, body) = run_cli(&["dash", "--vendors-date", "2025-13-01", "--json"]);
    assert_eq!(code, Some(1));
    let payload = parse_json(&body);
    assert_eq!(payload["ok"], false);
    assert_eq!(payload["error"]["code"], "invalid_argument");
    let message = payload["error"]["message"].as_str().unwrap_or("");
    assert!(!message.contains("Usage:"));
}

#[test]
fn unknown_flag_in_text_mode_renders_guidance() {
    let (code, body) = run_cli(&["items", "--bogus"]);
    assert_eq!(code, Some(1));
    assert!(body.contains("  Error:    invalid_argument"));
    assert!(body.contains("What to do next:"));
}
