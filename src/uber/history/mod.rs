//! History module - the rider's past trips

mod api;
mod commands;
mod models;

pub use commands::run_history_command;
pub use models::{Trip, TripListing};
