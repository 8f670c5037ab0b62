//! Uber API client module
//!
//! Authenticated access to the rides, estimates, deliveries, payments and
//! driver endpoints, with paginated listings streamed page by page.

pub mod actionable;
pub mod cancel;
mod client;
mod credentials;
pub mod deliveries;
pub mod driver;
pub mod estimates;
pub mod helpers;
pub mod history;
pub mod models;
pub mod pagination;
pub mod payments;
pub mod places;
pub mod products;
pub mod profile;
pub mod rides;
pub mod traits;

pub use actionable::{lookup_by_signature, ActionableError};
pub use cancel::{CancelHandle, CancelSignal};
pub use client::{ApiVersion, UberClient};
pub use credentials::{Credential, OAuth2Token, TokenResolver};
pub use deliveries::{run_deliveries_command, Delivery, DeliveryListRequest, DeliveryRequest};
pub use driver::{run_driver_payments_command, DriverPaymentsQuery};
pub use estimates::{
    run_fares_command, run_price_estimates_command, run_time_estimates_command, EstimateRequest,
    PriceEstimate, TimeEstimate, UpfrontFare,
};
pub use history::{run_history_command, Trip};
pub use models::{Coordinates, Location};
pub use pagination::{Endpoint, Page, PageStream, Pager, Throttle};
pub use payments::{run_payment_methods_command, Payment, PaymentListing, PaymentMethodKind};
pub use places::{run_place_command, Place, PlaceName};
pub use products::{run_products_command, Product};
pub use profile::{run_profile_command, Profile, PromoCode};
pub use rides::{run_order_command, run_receipt_command, Receipt, Ride, RideMap, RideRequest};
pub use traits::PaginatedResponse;
