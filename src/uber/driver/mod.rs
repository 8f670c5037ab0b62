//! Driver module - payments earned by the authenticated driver

mod api;
mod commands;
mod models;

pub use commands::run_driver_payments_command;
pub use models::{DriverPaymentListing, DriverPaymentsQuery};
