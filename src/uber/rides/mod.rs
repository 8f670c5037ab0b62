//! Rides module - requesting rides and their receipts and maps

mod api;
mod commands;
mod models;

pub use commands::{run_order_command, run_receipt_command};
pub use models::{DriverInfo, Receipt, Ride, RideMap, RideRequest, Vehicle};
