//! Delivery data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, UberError};
use crate::uber::models::Location;
use crate::uber::pagination::Pager;
use crate::uber::traits::PaginatedResponse;

/// Status listed when none is given
pub const DEFAULT_LIST_STATUS: &str = "ready";

/// A package to deliver
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Item {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "is_fragile", default)]
    pub fragile: bool,
    #[serde(rename = "width", default, skip_serializing_if = "Option::is_none")]
    pub width_inches: Option<f32>,
    #[serde(rename = "height", default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f32>,
    #[serde(rename = "length", default, skip_serializing_if = "Option::is_none")]
    pub length_inches: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

impl Item {
    pub fn new(title: impl Into<String>, quantity: i64) -> Self {
        Self {
            title: title.into(),
            quantity,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantity <= 0 {
            return Err(UberError::InvalidInput(
                "quantity has to be > 0".to_string(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(UberError::InvalidInput(
                "item title has to be non-empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Phone {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub sms_enabled: bool,
}

/// Person at either end of a delivery, or the courier
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub send_email_notifications: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub send_sms_notifications: bool,
}

/// Pickup or dropoff of a delivery
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DeliveryEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub signature_required: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub includes_alcohol: bool,
    #[serde(rename = "eta", default, skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<i64>,
    /// Unix seconds
    #[serde(rename = "timestamp", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_unix: Option<i64>,
}

impl DeliveryEndpoint {
    fn validate(&self, which: &str) -> Result<()> {
        if self.location.is_none() {
            return Err(UberError::InvalidInput(format!(
                "a {which}.location is required"
            )));
        }
        if self.contact.is_none() {
            return Err(UberError::InvalidInput(format!(
                "a {which}.contact is required"
            )));
        }
        Ok(())
    }
}

/// Body of `POST /deliveries`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DeliveryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<DeliveryEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<DeliveryEndpoint>,
}

impl DeliveryRequest {
    pub fn validate(&self) -> Result<()> {
        let pickup = self
            .pickup
            .as_ref()
            .ok_or_else(|| UberError::InvalidInput("a pickup is required".to_string()))?;
        pickup.validate("pickup")?;

        let dropoff = self
            .dropoff
            .as_ref()
            .ok_or_else(|| UberError::InvalidInput("a dropoff is required".to_string()))?;
        dropoff.validate("dropoff")?;

        if !self.items.iter().any(|item| item.validate().is_ok()) {
            return Err(UberError::InvalidInput(
                "expecting at least one valid item".to_string(),
            ));
        }
        Ok(())
    }
}

/// Deliveries dispatched together
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Batch {
    #[serde(rename = "batch_id", default)]
    pub id: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deliveries: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    #[serde(rename = "delivery_id", default)]
    pub id: String,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courier: Option<Contact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<DeliveryEndpoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff: Option<DeliveryEndpoint>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
}

/// Which deliveries to list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryListRequest {
    /// Defaults to [`DEFAULT_LIST_STATUS`]
    pub status: Option<String>,
    pub pager: Pager,
}

impl DeliveryListRequest {
    pub(crate) fn status(&self) -> &str {
        self.status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LIST_STATUS)
    }
}

/// One page of `GET /deliveries`
#[derive(Deserialize, Debug)]
pub struct DeliveryListing {
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub next_page: String,
    #[serde(default)]
    pub previous_page: String,
}

impl PaginatedResponse<Delivery> for DeliveryListing {
    fn remaining_count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Delivery> {
        self.deliveries
    }

    fn is_last_page(&self) -> bool {
        self.next_page.trim().is_empty() || self.deliveries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> DeliveryEndpoint {
        DeliveryEndpoint {
            location: Some(Location {
                primary_address: Some("530 W 113th Street".to_string()),
                ..Location::default()
            }),
            contact: Some(Contact {
                first_name: Some("Rob".to_string()),
                ..Contact::default()
            }),
            ..DeliveryEndpoint::default()
        }
    }

    fn valid_request() -> DeliveryRequest {
        DeliveryRequest {
            items: vec![Item::new("Shoes", 1)],
            pickup: Some(endpoint()),
            dropoff: Some(endpoint()),
            ..DeliveryRequest::default()
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_pickup_or_contact() {
        let mut req = valid_request();
        req.pickup = None;
        assert!(req.validate().is_err());

        let mut req = valid_request();
        if let Some(dropoff) = req.dropoff.as_mut() {
            dropoff.contact = None;
        }
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("dropoff.contact"));
    }

    #[test]
    fn test_needs_one_valid_item() {
        let mut req = valid_request();
        req.items = vec![Item::new("Shoes", 0), Item::new("  ", 2)];
        assert!(req.validate().is_err());

        req.items.push(Item::new("Hat", 1));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_list_status_default() {
        assert_eq!(DeliveryListRequest::default().status(), "ready");
        let req = DeliveryListRequest {
            status: Some("completed".to_string()),
            ..DeliveryListRequest::default()
        };
        assert_eq!(req.status(), "completed");
    }

    #[test]
    fn test_listing_last_page() {
        let listing: DeliveryListing = serde_json::from_value(serde_json::json!({
            "count": 30,
            "next_page": "status=ready&limit=10&offset=10",
            "deliveries": [{"delivery_id": "d-1", "status": "ready"}]
        }))
        .unwrap();
        assert!(!listing.is_last_page());

        let listing: DeliveryListing = serde_json::from_value(serde_json::json!({
            "count": 30,
            "next_page": "",
            "deliveries": [{"delivery_id": "d-1"}]
        }))
        .unwrap();
        assert!(listing.is_last_page());
    }
}
