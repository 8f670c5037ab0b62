//! CLI argument parsing

mod common;
mod get;
mod order;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{OutputFormat, PagingArgs, TripArgs};
pub use get::{
    DeliveryArgs, DriverPaymentArgs, FareArgs, GetResource, HistoryArgs, OutputArgs, PlaceArgs,
    PriceEstimateArgs, ProductArgs, ProfileArgs, ReceiptArgs, TimeEstimateArgs,
};
pub use order::{OrderArgs, Waypoint};

/// Explore the Uber API from the terminal
#[derive(Parser, Debug)]
#[command(name = "uberctl")]
#[command(version)]
#[command(about = "Explore the Uber API: trips, estimates, deliveries, payments and rides", long_about = None)]
pub struct Cli {
    /// API token (overrides the credentials file)
    #[arg(short = 't', long, global = true, env = "UBER_TOKEN_KEY", hide_env_values = true)]
    pub token: Option<String>,

    /// Send requests to the sandbox instead of production
    #[arg(long, global = true, env = "UBER_SANDBOX")]
    pub sandbox: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(long, global = true)]
    pub batch: bool,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Override the API base URL
    #[arg(long, global = true, env = "UBER_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Order a ride
    Order(OrderArgs),
}
