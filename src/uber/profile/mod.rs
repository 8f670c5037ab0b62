//! Profile module - rider and driver accounts

mod api;
mod commands;
mod models;

pub use commands::run_profile_command;
pub use models::{ActivationStatus, Profile, PromoCode};
