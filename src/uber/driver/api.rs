//! Driver payment API operations

use crate::config::api;
use crate::error::Result;
use crate::uber::client::{ApiVersion, UberClient};
use crate::uber::pagination::{Endpoint, PageStream};
use crate::uber::payments::Payment;

use super::models::{DriverPaymentListing, DriverPaymentsQuery};

impl UberClient {
    /// Stream the authenticated driver's payments
    ///
    /// The stream ends at the first empty page.
    pub fn list_driver_payments(
        &self,
        query: Option<DriverPaymentsQuery>,
    ) -> Result<PageStream<Payment>> {
        let query = query.unwrap_or_default();
        query.validate()?;

        let mut endpoint = Endpoint::new(api::DRIVER_PAYMENTS, ApiVersion::V1);
        endpoint.query = query.query_pairs();
        Ok(self.paginate::<Payment, DriverPaymentListing>(endpoint, query.pager))
    }
}
