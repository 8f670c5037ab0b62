//! Common traits for paginated Uber resources

use serde::de::DeserializeOwned;

/// Trait for API responses that contain one page of a paginated listing
///
/// Implement this trait for any `XListing` struct to enable use with
/// `UberClient::paginate()`.
pub trait PaginatedResponse<T>: DeserializeOwned + Send + 'static {
    /// Server-reported continuation signal; `<= 0` ends the stream
    fn remaining_count(&self) -> i64;

    /// Consume self and return the page items
    fn into_items(self) -> Vec<T>;

    /// Whether the listing itself says there is nothing after this page
    ///
    /// Endpoints that carry their own cursor override this.
    fn is_last_page(&self) -> bool {
        false
    }
}
