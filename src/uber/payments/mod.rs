//! Payments module - payment methods on file

mod api;
mod commands;
mod models;

pub use commands::run_payment_methods_command;
pub use models::{Payment, PaymentListing, PaymentMethodKind};
