//! Table and JSON output formatting for CLI commands.
//!
//! Listings render as tables or pretty JSON depending on `--format`;
//! single-record views are composed by the commands themselves out of
//! [`print_kv`] lines, with [`print_json`] as the JSON escape hatch.

use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table if items.is_empty() => println!("Nothing to show."),
        OutputFormat::Table => {
            let mut table = Table::new(items);
            table.with(Style::psql());
            println!("{table}");
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Could not render JSON: {e}")),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print one labelled field of a single-record view
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<14} {value}", format!("{key}:"))
}
