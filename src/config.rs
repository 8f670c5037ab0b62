/// Configuration constants for the Uber API
pub mod api {
    /// Production API host
    pub const PRODUCTION_HOST: &str = "api.uber.com";

    /// Sandbox API host (requests never touch real riders or drivers)
    pub const SANDBOX_HOST: &str = "sandbox-api.uber.com";

    /// Default API version prefix
    pub const DEFAULT_VERSION: &str = "v1.2";

    /// Legacy API version prefix (deliveries listing, driver endpoints)
    pub const LEGACY_VERSION: &str = "v1";

    /// Trip history endpoint
    pub const HISTORY: &str = "history";

    /// Price estimates endpoint
    pub const PRICE_ESTIMATES: &str = "estimates/price";

    /// Time estimates endpoint
    pub const TIME_ESTIMATES: &str = "estimates/time";

    /// Deliveries endpoint
    pub const DELIVERIES: &str = "deliveries";

    /// Driver payments endpoint
    pub const DRIVER_PAYMENTS: &str = "partners/payments";

    /// Driver profile endpoint
    pub const DRIVER_PROFILE: &str = "partners/me";

    /// Rider profile endpoint
    pub const PROFILE: &str = "me";

    /// Payment methods endpoint
    pub const PAYMENT_METHODS: &str = "payment-methods";

    /// Products endpoint
    pub const PRODUCTS: &str = "products";

    /// Places endpoint
    pub const PLACES: &str = "places";

    /// Ride requests endpoint
    pub const REQUESTS: &str = "requests";

    /// Upfront fare endpoint
    pub const UPFRONT_FARE: &str = "requests/estimate";

    /// Error bodies shorter than this are never parsed as structured JSON
    pub const MIN_STRUCTURED_ERROR_LEN: usize = 4;

    /// Maximum concurrent upfront-fare lookups issued by the CLI
    pub const MAX_CONCURRENT_FARE_LOOKUPS: usize = 5;
}

/// Pagination defaults
pub mod paging {
    use std::time::Duration;

    /// Items requested per page when the caller does not say otherwise
    pub const DEFAULT_LIMIT_PER_PAGE: i64 = 50;

    /// Offset of the first page when the caller does not say otherwise
    pub const DEFAULT_START_OFFSET: i64 = 0;

    /// Wait between two page fetches
    pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(150);

    /// Millisecond sentinel that disables the inter-page wait entirely
    pub const NO_THROTTLE: i64 = -1;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding a bearer token
    pub const TOKEN_ENV_VAR: &str = "UBER_TOKEN_KEY";

    /// Path to the OAuth2 credentials file (relative to HOME)
    pub const FILE_PATH: &str = ".uber/credentials.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default number of pages fetched by paginated CLI commands
    pub const MAX_PAGES: i64 = 4;
}
