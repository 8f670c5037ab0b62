//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use log::warn;
use serde::Serialize;

use super::TableRow;
use crate::cli::OutputFormat;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Failed to serialize JSON output: {}", e),
    }
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => warn!("Failed to serialize YAML output: {}", e),
    }
}

pub(crate) fn render_table<T: TableRow>(rows: &[T], header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if header {
        table.set_header(T::HEADERS.to_vec());
    }
    for row in rows {
        table.add_row(row.cells());
    }
    table.to_string()
}

pub(crate) fn render_csv<T: TableRow>(rows: &[T], header: bool) -> String {
    let mut out = String::new();
    if header {
        out.push_str(&T::HEADERS.join(","));
        out.push('\n');
    }
    for row in rows {
        let cells: Vec<String> = row.cells().iter().map(|c| escape_csv(c)).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }
    out
}

/// Output items in the specified format
pub fn output_items<T: TableRow>(items: &[T], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_table(items, !no_header)),
        OutputFormat::Csv => print!("{}", render_csv(items, !no_header)),
        OutputFormat::Json => print_json(items),
        OutputFormat::Yaml => print_yaml(items),
    }
}

/// Output a single object in the specified format
pub fn output_item<T: TableRow>(item: &T, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(item),
        OutputFormat::Yaml => print_yaml(item),
        _ => output_items(std::slice::from_ref(item), format, no_header),
    }
}
