//! Delivery API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{segment, ApiVersion, UberClient};
use crate::uber::pagination::{Endpoint, PageStream};

use super::models::{Delivery, DeliveryListRequest, DeliveryListing, DeliveryRequest};

impl UberClient {
    /// Stream deliveries in a given status (`ready` by default)
    ///
    /// Served by the legacy v1 API.
    pub fn list_deliveries(&self, req: Option<DeliveryListRequest>) -> PageStream<Delivery> {
        let req = req.unwrap_or_default();
        let endpoint =
            Endpoint::new(api::DELIVERIES, ApiVersion::V1).param("status", req.status());
        self.paginate::<Delivery, DeliveryListing>(endpoint, req.pager)
    }

    /// Request a new delivery
    pub async fn request_delivery(&self, req: &DeliveryRequest) -> Result<Delivery> {
        req.validate()?;
        let url = self.url(ApiVersion::V1_2, api::DELIVERIES, &[])?;
        debug!("Requesting delivery: {}", url);
        self.send_json(self.post_authenticated(url)?.json(req)).await
    }

    /// Cancel a delivery that has not been picked up yet
    pub async fn cancel_delivery(&self, delivery_id: &str) -> Result<()> {
        let delivery_id = delivery_id.trim();
        if delivery_id.is_empty() {
            return Err(UberError::InvalidInput(
                "expecting a non-blank deliveryID".to_string(),
            ));
        }

        let url = self.url(
            ApiVersion::V1_2,
            &format!("{}/{}/cancel", api::DELIVERIES, segment(delivery_id)),
            &[],
        )?;
        debug!("Cancelling delivery: {}", url);
        self.send_empty(self.post_authenticated(url)?).await
    }
}
