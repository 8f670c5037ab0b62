//! Output formatting module
//!
//! Handles the table, CSV, JSON and YAML renderings of every resource.

mod common;
mod deliveries;
mod estimates;
mod history;
mod pages;
mod payments;
mod places;
mod products;
mod profile;
mod rides;

use serde::Serialize;

pub use common::{escape_csv, output_item, output_items, print_json, print_yaml};
pub use estimates::FareRow;
pub use pages::PageWriter;

/// A resource that can be printed as one table or CSV row
///
/// JSON and YAML output use the `Serialize` impl instead.
pub trait TableRow: Serialize {
    /// Column headers, in the order of [`TableRow::cells`]
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}
