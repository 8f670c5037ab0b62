//! Deliveries module - on-demand package delivery

mod api;
mod commands;
mod models;

pub use commands::run_deliveries_command;
pub use models::{
    Batch, Contact, Delivery, DeliveryEndpoint, DeliveryListRequest, DeliveryListing,
    DeliveryRequest, Item, Phone, DEFAULT_LIST_STATUS,
};
