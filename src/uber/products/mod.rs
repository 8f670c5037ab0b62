//! Products module - ride products available at a location

mod api;
mod commands;
mod models;

pub use commands::run_products_command;
pub use models::{PriceDetails, Product};
