//! Price, time and upfront fare data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, UberError};
use crate::uber::history::Trip;
use crate::uber::models::{Coordinates, FareBreakdown};
use crate::uber::pagination::Pager;
use crate::uber::places::PlaceName;
use crate::uber::traits::PaginatedResponse;

/// Largest seat count accepted for shared rides
pub const MAX_SEAT_COUNT: u8 = 2;

/// Where an estimate starts or ends
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimateRequest {
    pub start: Option<Coordinates>,
    pub end: Option<Coordinates>,
    pub start_place: Option<PlaceName>,
    pub end_place: Option<PlaceName>,
    /// Shared rides only; 0 means the server default
    pub seat_count: u8,
    pub product_id: Option<String>,
    pub pager: Pager,
}

impl EstimateRequest {
    /// Estimate between two coordinates
    pub fn between(start: Coordinates, end: Coordinates) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            ..Self::default()
        }
    }

    /// Estimate at a pickup location
    pub fn at(start: Coordinates) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    fn has_start(&self) -> bool {
        self.start.is_some() || self.start_place.is_some()
    }

    fn has_end(&self) -> bool {
        self.end.is_some() || self.end_place.is_some()
    }

    fn validate_seats(&self) -> Result<()> {
        if self.seat_count > MAX_SEAT_COUNT {
            return Err(UberError::InvalidInput(format!(
                "invalid seat count {}, default and maximum value is {}",
                self.seat_count, MAX_SEAT_COUNT
            )));
        }
        Ok(())
    }

    pub(crate) fn validate_for_time(&self) -> Result<()> {
        if !self.has_start() {
            return Err(UberError::InvalidInput(
                "expecting a start location for time estimates".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_for_price(&self) -> Result<()> {
        if !self.has_start() || !self.has_end() {
            return Err(UberError::InvalidInput(
                "expecting start and end locations for price estimates".to_string(),
            ));
        }
        self.validate_seats()
    }

    pub(crate) fn validate_for_upfront_fare(&self) -> Result<()> {
        self.validate_for_price()
    }

    /// Query parameters describing the trip; zero-valued fields are omitted
    pub(crate) fn query_pairs(&self, include_seats: bool) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = self.start {
            pairs.push(("start_latitude".to_string(), start.latitude.to_string()));
            pairs.push(("start_longitude".to_string(), start.longitude.to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end_latitude".to_string(), end.latitude.to_string()));
            pairs.push(("end_longitude".to_string(), end.longitude.to_string()));
        }
        if let Some(place) = self.start_place {
            pairs.push(("start_place_id".to_string(), place.to_string()));
        }
        if let Some(place) = self.end_place {
            pairs.push(("end_place_id".to_string(), place.to_string()));
        }
        if let Some(product_id) = self.product_id.as_deref().filter(|p| !p.is_empty()) {
            pairs.push(("product_id".to_string(), product_id.to_string()));
        }
        if include_seats && self.seat_count > 0 {
            pairs.push(("seat_count".to_string(), self.seat_count.to_string()));
        }
        pairs
    }
}

/// Body of `POST /requests/estimate`
#[derive(Serialize, Debug, Default)]
pub(crate) struct UpfrontFareBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_longitude: Option<f64>,
    #[serde(rename = "start_place_id", skip_serializing_if = "Option::is_none")]
    pub start_place: Option<PlaceName>,
    #[serde(rename = "end_place_id", skip_serializing_if = "Option::is_none")]
    pub end_place: Option<PlaceName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<u8>,
}

impl<'a> From<&'a EstimateRequest> for UpfrontFareBody<'a> {
    fn from(req: &'a EstimateRequest) -> Self {
        Self {
            start_latitude: req.start.map(|c| c.latitude),
            start_longitude: req.start.map(|c| c.longitude),
            end_latitude: req.end.map(|c| c.latitude),
            end_longitude: req.end.map(|c| c.longitude),
            start_place: req.start_place,
            end_place: req.end_place,
            product_id: req.product_id.as_deref().filter(|p| !p.is_empty()),
            seat_count: Some(req.seat_count).filter(|s| *s > 0),
        }
    }
}

/// Price range for one product
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceEstimate {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_display_name: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
    /// Formatted estimate, e.g. "$23-29"
    #[serde(default)]
    pub estimate: Option<String>,
    /// Expected trip duration in seconds
    #[serde(rename = "duration", default)]
    pub duration_seconds: Option<f64>,
    #[serde(rename = "minimum", default)]
    pub minimum_price: Option<f64>,
    #[serde(default)]
    pub low_estimate: Option<f64>,
    #[serde(default)]
    pub high_estimate: Option<f64>,
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
}

/// One page of `GET /estimates/price`
#[derive(Deserialize, Debug)]
pub struct PriceListing {
    #[serde(default)]
    pub prices: Vec<PriceEstimate>,
    #[serde(default)]
    pub count: i64,
}

impl PaginatedResponse<PriceEstimate> for PriceListing {
    fn remaining_count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<PriceEstimate> {
        self.prices
    }
}

/// Pickup time for one product
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TimeEstimate {
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_display_name: Option<String>,
    /// Seconds until pickup
    #[serde(rename = "estimate", default)]
    pub eta_seconds: Option<f64>,
}

/// One page of `GET /estimates/time`
#[derive(Deserialize, Debug)]
pub struct TimeListing {
    #[serde(default)]
    pub times: Vec<TimeEstimate>,
    #[serde(default)]
    pub count: i64,
}

impl PaginatedResponse<TimeEstimate> for TimeListing {
    fn remaining_count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<TimeEstimate> {
        self.times
    }
}

/// Surge-aware estimate attached to an upfront fare
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FareEstimate {
    #[serde(rename = "surge_confirmation_href", default, skip_serializing_if = "Option::is_none")]
    pub surge_confirmation_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_confirmation_id: Option<String>,
    #[serde(rename = "fare_breakdown", default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<FareBreakdown>,
    #[serde(default)]
    pub surge_multiplier: Option<f64>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(rename = "display", default)]
    pub display_amount: Option<String>,
}

/// A quoted fare
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Fare {
    #[serde(rename = "fare_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(rename = "display", default)]
    pub display_amount: Option<String>,
}

/// Response of `POST /requests/estimate`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UpfrontFare {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip: Option<Trip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fare: Option<Fare>,
    /// Minutes until pickup
    #[serde(rename = "pickup_estimate", default, skip_serializing_if = "Option::is_none")]
    pub pickup_estimate_minutes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<FareEstimate>,
}

impl UpfrontFare {
    /// Whether the rider must confirm surge pricing before requesting
    pub fn surge_in_effect(&self) -> bool {
        self.estimate
            .as_ref()
            .and_then(|e| e.surge_confirmation_url.as_deref())
            .is_some_and(|url| !url.is_empty())
    }

    pub fn no_cars_available(&self) -> bool {
        self.pickup_estimate_minutes.is_none_or(|m| m <= 0.0)
    }

    pub fn fare_id(&self) -> Option<&str> {
        self.fare
            .as_ref()
            .and_then(|f| f.id.as_deref())
            .filter(|id| !id.trim().is_empty())
    }

    pub fn product_id(&self) -> Option<&str> {
        self.trip
            .as_ref()
            .and_then(|t| t.product_id.as_deref())
            .filter(|id| !id.is_empty())
    }

    /// Human-readable fare, e.g. "$5.75"
    pub fn display_amount(&self) -> &str {
        self.fare
            .as_ref()
            .and_then(|f| f.display_amount.as_deref())
            .or_else(|| self.estimate.as_ref().and_then(|e| e.display_amount.as_deref()))
            .unwrap_or("-")
    }

    pub(crate) fn is_blank(&self) -> bool {
        *self == UpfrontFare::default()
    }
}
