//! Ride request, ride, receipt and map models

use serde::{Deserialize, Serialize};

use crate::error::{Result, UberError};
use crate::uber::actionable::INVALID_FARE_ID;
use crate::uber::estimates::{EstimateRequest, MAX_SEAT_COUNT};
use crate::uber::models::{Coordinates, Location};
use crate::uber::places::PlaceName;

/// A ride to request
///
/// `fare_id` comes from an upfront fare quote; without one the request is
/// rejected before reaching the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideRequest {
    pub fare_id: Option<String>,
    pub start: Option<Coordinates>,
    pub end: Option<Coordinates>,
    pub start_place: Option<PlaceName>,
    pub end_place: Option<PlaceName>,
    pub product_id: Option<String>,
    pub surge_confirmation_id: Option<String>,
    pub payment_method_id: Option<String>,
    pub seat_count: u8,
    pub expense_code: Option<String>,
    pub expense_memo: Option<String>,
}

impl RideRequest {
    pub(crate) fn has_fare_id(&self) -> bool {
        self.fare_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.has_fare_id() {
            return Err(UberError::Actionable(&INVALID_FARE_ID));
        }
        if self.start.is_none() && self.start_place.is_none() {
            return Err(UberError::InvalidInput(
                "invalid startPlace or (startLat, startLon)".to_string(),
            ));
        }
        if self.end.is_none() && self.end_place.is_none() {
            return Err(UberError::InvalidInput(
                "invalid endPlace or (endLat, endLon)".to_string(),
            ));
        }
        if self.seat_count > MAX_SEAT_COUNT {
            return Err(UberError::InvalidInput(format!(
                "invalid seat count {}, default and maximum value is {}",
                self.seat_count, MAX_SEAT_COUNT
            )));
        }
        Ok(())
    }

    /// The fare quote request matching this ride
    pub(crate) fn estimate_request(&self) -> EstimateRequest {
        EstimateRequest {
            start: self.start,
            end: self.end,
            start_place: self.start_place,
            end_place: self.end_place,
            seat_count: self.seat_count,
            product_id: self.product_id.clone(),
            ..EstimateRequest::default()
        }
    }
}

/// Body of `POST /requests`
#[derive(Serialize, Debug)]
pub(crate) struct RideRequestBody<'a> {
    fare_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_longitude: Option<f64>,
    #[serde(rename = "start_place_id", skip_serializing_if = "Option::is_none")]
    start_place: Option<PlaceName>,
    #[serde(rename = "end_place_id", skip_serializing_if = "Option::is_none")]
    end_place: Option<PlaceName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    surge_confirmation_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_method_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seat_count: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expense_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expense_memo: Option<&'a str>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl<'a> From<&'a RideRequest> for RideRequestBody<'a> {
    fn from(req: &'a RideRequest) -> Self {
        Self {
            fare_id: non_empty(&req.fare_id).unwrap_or_default(),
            start_latitude: req.start.map(|c| c.latitude),
            start_longitude: req.start.map(|c| c.longitude),
            end_latitude: req.end.map(|c| c.latitude),
            end_longitude: req.end.map(|c| c.longitude),
            start_place: req.start_place,
            end_place: req.end_place,
            product_id: non_empty(&req.product_id),
            surge_confirmation_id: non_empty(&req.surge_confirmation_id),
            payment_method_id: non_empty(&req.payment_method_id),
            seat_count: Some(req.seat_count).filter(|s| *s > 0),
            expense_code: non_empty(&req.expense_code),
            expense_memo: non_empty(&req.expense_memo),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Vehicle {
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub license_plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

/// The driver assigned to a ride
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DriverInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A requested ride
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Ride {
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Vehicle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "eta", default, skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_multiplier: Option<f64>,
}

impl Ride {
    pub fn surge_in_effect(&self) -> bool {
        self.surge_multiplier.is_some_and(|m| m > 1.0)
    }
}

/// Receipt of a completed ride
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Receipt {
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_fare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_charged: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_owed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// "HH:MM:SS"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(rename = "distance_label", default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<String>,
}

/// Link to the live map of a ride
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RideMap {
    #[serde(default)]
    pub request_id: String,
    #[serde(rename = "href", default)]
    pub url: String,
}
