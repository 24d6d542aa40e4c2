use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use pricedash_client::commands::common::UploadOptions;

pub fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "date must use valid calendar values".to_string())
}

/// Extended help shown after `pricedash dash --help`.
pub const DASH_AFTER_HELP: &str = "\
How the dashboard works:
  Pass one vendors export and one sellers export. Every row of a file is
  stamped with that file's batch date; dates inside the file are ignored.
  Until both files are given, only a placeholder is shown.

  The two files are stacked (vendors first), one item is selected, and the
  dashboard shows a box plot per batch date, summary statistics per batch
  date, and the matching rows.

File layout (CSV, one header row):
  item,value,vendor,store name,amount
  Red Potion,\"1,250 z\",Ann,Ann's Corner,10
  Red Potion,1300,Bob,Bob's Stall,4

  item (required):
    The key you select with `--item`.

  value (optional):
    A plain number (`1300`) or a number with thousands separators and a
    unit suffix (`1,250 z`). Anything else stops the run with an error.

  bonus (optional):
    Dropped on load; it differs between exports.

  Other columns are carried through; `vendor`, `store name` and `amount`
  appear in the detail table.

What to do next:
  1. Run `pricedash items --vendors <path> --sellers <path>` to list items.
  2. Run `pricedash dash --vendors <path> --sellers <path> --item <item>`.
  3. Add `--json` for machine-readable output, or run `pricedash chart` for
     a Vega-Lite box plot spec.
";

#[derive(Debug, Parser)]
#[command(
    name = "pricedash",
    version,
    about = "item price dashboard for vendor and seller exports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Args)]
pub struct UploadArgs {
    /// Path to the vendors CSV export
    #[arg(long, value_name = "PATH")]
    pub vendors: Option<PathBuf>,
    /// Batch date for every vendors row (YYYY-MM-DD) [default: 2025-08-23]
    #[arg(long, value_name = "DATE", value_parser = parse_iso_date)]
    pub vendors_date: Option<NaiveDate>,
    /// Path to the sellers CSV export
    #[arg(long, value_name = "PATH")]
    pub sellers: Option<PathBuf>,
    /// Batch date for every sellers row (YYYY-MM-DD) [default: 2025-07-24]
    #[arg(long, value_name = "DATE", value_parser = parse_iso_date)]
    pub sellers_date: Option<NaiveDate>,
}

impl UploadArgs {
    pub fn to_options(&self) -> UploadOptions {
        UploadOptions {
            vendors_path: self.vendors.clone(),
            vendors_date: self.vendors_date,
            sellers_path: self.sellers.clone(),
            sellers_date: self.sellers_date,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the price dashboard for one item
    #[command(after_long_help = DASH_AFTER_HELP)]
    Dash {
        #[command(flatten)]
        uploads: UploadArgs,
        /// Item to analyze (defaults to the first item in sorted order)
        #[arg(long)]
        item: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List the distinct items found in both uploads
    Items {
        #[command(flatten)]
        uploads: UploadArgs,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Print the Vega-Lite box plot spec for one item
    Chart {
        #[command(flatten)]
        uploads: UploadArgs,
        /// Item to plot (defaults to the first item in sorted order)
        #[arg(long)]
        item: Option<String>,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
