//! Incremental output for paginated listings

use super::common::{output_items, render_csv, render_table};
use super::TableRow;
use crate::cli::OutputFormat;

/// Prints pages as they arrive (table/CSV) or collects them (JSON/YAML)
pub struct PageWriter<T> {
    format: OutputFormat,
    header_pending: bool,
    collected: Vec<T>,
    total: usize,
}

impl<T: TableRow> PageWriter<T> {
    pub fn new(format: OutputFormat, no_header: bool) -> Self {
        Self {
            format,
            header_pending: !no_header,
            collected: Vec::new(),
            total: 0,
        }
    }

    /// Handle one page of items
    pub fn write_page(&mut self, items: Vec<T>) {
        if items.is_empty() {
            return;
        }
        self.total += items.len();

        match self.format {
            OutputFormat::Table => {
                println!("{}", render_table(&items, self.header_pending));
                self.header_pending = false;
            }
            OutputFormat::Csv => {
                print!("{}", render_csv(&items, self.header_pending));
                self.header_pending = false;
            }
            OutputFormat::Json | OutputFormat::Yaml => self.collected.extend(items),
        }
    }

    /// Flush collected items; returns how many items were written overall
    pub fn finish(self) -> usize {
        if !self.format.is_streaming() {
            output_items(&self.collected, self.format, false);
        }
        self.total
    }
}
