//! Estimates module - price, pickup time and upfront fare quotes

mod api;
mod commands;
mod models;

pub(crate) use commands::fetch_fares;
pub use commands::{run_fares_command, run_price_estimates_command, run_time_estimates_command};
pub use models::{
    EstimateRequest, Fare, FareEstimate, PriceEstimate, TimeEstimate, UpfrontFare, MAX_SEAT_COUNT,
};
