//! uberctl - Uber API client library and CLI
//!
//! Rides, trip history, estimates, deliveries, payments and driver data
//! over the Uber REST API.
//!
//! # Features
//!
//! - Bearer token or OAuth2 credentials, sandbox or production hosts
//! - Paginated listings streamed page by page, with cancellation and
//!   throttling between pages
//! - Structured API errors mapped to actionable guidance
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Last four pages of trip history
//! uberctl get history --max-pages 4
//!
//! # Price estimates between two points, as JSON
//! uberctl get prices --start-lat 37.7752 --start-lng -122.4180 \
//!     --end-lat 37.7752 --end-lng -122.5180 -o json
//!
//! # Order a ride from home to work against the sandbox
//! uberctl --sandbox order --start-place home --end-place work
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod uber;
pub mod ui;

pub use cli::{Cli, Command, GetResource, OutputFormat};
pub use error::{ApiError, Result, StatusCodedError, UberError};
pub use uber::{
    ApiVersion, Coordinates, Credential, OAuth2Token, Page, PageStream, Pager, PlaceName,
    Throttle, TokenResolver, UberClient,
};
