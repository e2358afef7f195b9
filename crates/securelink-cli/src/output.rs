//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// A single `key = value` row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    /// Setting or field name.
    #[tabled(rename = "Key")]
    pub key: String,
    /// Rendered value.
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a row.
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

/// Print rows as a table, or `json` as pretty JSON.
pub fn print_rows<T: Serialize>(rows: &[KeyValue], json: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(json).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
