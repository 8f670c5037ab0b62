//! Get command resource definitions and arguments

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use super::common::{OutputFormat, PagingArgs, TripArgs};
use crate::uber::PlaceName;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get trip history
    #[command(visible_alias = "trips")]
    History(HistoryArgs),

    /// Get price estimates between two points
    #[command(visible_alias = "prices")]
    PriceEstimates(PriceEstimateArgs),

    /// Get pickup time estimates at a location
    #[command(visible_alias = "times")]
    TimeEstimates(TimeEstimateArgs),

    /// Get deliveries
    #[command(visible_alias = "delivery")]
    Deliveries(DeliveryArgs),

    /// Get driver payments
    DriverPayments(DriverPaymentArgs),

    /// Get payment methods on file
    PaymentMethods(OutputArgs),

    /// Get products available at a location
    #[command(visible_alias = "product")]
    Products(ProductArgs),

    /// Get the rider (or driver) profile
    #[command(visible_alias = "me")]
    Profile(ProfileArgs),

    /// Get a saved place
    Place(PlaceArgs),

    /// Get the receipt of a ride request
    Receipt(ReceiptArgs),

    /// Get upfront fares for every product between two points
    Fares(FareArgs),
}

/// Output flag only
#[derive(Parser, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get history' subcommand
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub paging: PagingArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get price-estimates' subcommand
#[derive(Parser, Debug)]
pub struct PriceEstimateArgs {
    #[command(flatten)]
    pub trip: TripArgs,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get time-estimates' subcommand
#[derive(Parser, Debug)]
pub struct TimeEstimateArgs {
    /// Start latitude
    #[arg(long, allow_negative_numbers = true)]
    pub start_lat: f64,

    /// Start longitude
    #[arg(long, allow_negative_numbers = true)]
    pub start_lng: f64,

    /// Only estimate this product
    #[arg(long)]
    pub product: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get deliveries' subcommand
#[derive(Parser, Debug)]
pub struct DeliveryArgs {
    /// Delivery status to filter on (default: ready)
    #[arg(long)]
    pub status: Option<String>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get driver-payments' subcommand
#[derive(Parser, Debug)]
pub struct DriverPaymentArgs {
    /// Only payments at or after this time (RFC 3339)
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,

    /// Only payments before this time (RFC 3339)
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,

    #[command(flatten)]
    pub paging: PagingArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get products' subcommand
#[derive(Parser, Debug)]
pub struct ProductArgs {
    /// Latitude of the pickup location
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the pickup location
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get profile' subcommand
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Show the driver profile instead of the rider profile
    #[arg(long)]
    pub driver: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get place' subcommand
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Saved place (home or work)
    pub name: PlaceName,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get receipt' subcommand
#[derive(Parser, Debug)]
pub struct ReceiptArgs {
    /// Ride request ID
    pub request_id: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get fares' subcommand
#[derive(Parser, Debug)]
pub struct FareArgs {
    #[command(flatten)]
    pub trip: TripArgs,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
