//! Places module - the rider's saved home and work addresses

mod api;
mod commands;
mod models;

pub use commands::run_place_command;
pub use models::{Place, PlaceName};
