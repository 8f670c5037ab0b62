//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::config::defaults;
use crate::uber::{Coordinates, Pager, Throttle};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl OutputFormat {
    /// Whether the format prints rows as pages arrive
    pub fn is_streaming(&self) -> bool {
        matches!(self, OutputFormat::Table | OutputFormat::Csv)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Pagination flags for listing commands
#[derive(Args, Debug, Clone)]
pub struct PagingArgs {
    /// Maximum number of pages to fetch (0 = all)
    #[arg(long, default_value_t = defaults::MAX_PAGES)]
    pub max_pages: i64,

    /// Items requested per page (0 = server default of 50)
    #[arg(long, default_value_t = 0)]
    pub limit_per_page: i64,

    /// Offset of the first item
    #[arg(long, default_value_t = 0)]
    pub offset: i64,

    /// Wait between pages in milliseconds (0 = 150ms, -1 = no wait)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub throttle_ms: i64,
}

impl From<&PagingArgs> for Pager {
    fn from(args: &PagingArgs) -> Self {
        Pager {
            limit_per_page: args.limit_per_page,
            start_offset: args.offset,
            max_pages: args.max_pages,
            throttle: Throttle::from_millis(args.throttle_ms),
        }
    }
}

/// Start and end coordinates for trip-shaped queries
#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// Start latitude
    #[arg(long, allow_negative_numbers = true)]
    pub start_lat: f64,

    /// Start longitude
    #[arg(long, allow_negative_numbers = true)]
    pub start_lng: f64,

    /// End latitude
    #[arg(long, allow_negative_numbers = true)]
    pub end_lat: f64,

    /// End longitude
    #[arg(long, allow_negative_numbers = true)]
    pub end_lng: f64,

    /// Number of seats (shared rides only, max 2)
    #[arg(long, default_value_t = 0)]
    pub seats: u8,
}

impl TripArgs {
    pub fn start(&self) -> Coordinates {
        Coordinates::new(self.start_lat, self.start_lng)
    }

    pub fn end(&self) -> Coordinates {
        Coordinates::new(self.end_lat, self.end_lng)
    }
}
