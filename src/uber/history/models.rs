//! Trip history data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::uber::places::Place;
use crate::uber::traits::PaginatedResponse;

/// A past trip
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Trip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Distance in miles
    #[serde(rename = "distance", default, skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_city: Option<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl Trip {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.start_time
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.end_time.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub fn city(&self) -> &str {
        self.start_city.as_ref().map(Place::name).unwrap_or("")
    }
}

/// One page of `GET /history`
#[derive(Deserialize, Debug)]
pub struct TripListing {
    #[serde(default)]
    pub history: Vec<Trip>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl PaginatedResponse<Trip> for TripListing {
    fn remaining_count(&self) -> i64 {
        self.count
    }

    fn into_items(self) -> Vec<Trip> {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_listing_deserialize() {
        let listing: TripListing = serde_json::from_value(serde_json::json!({
            "offset": 0,
            "limit": 1,
            "count": 5,
            "history": [{
                "status": "completed",
                "distance": 1.64691465,
                "request_id": "7354db54-cc9b-4961-81f2-0094b8e2d215",
                "start_time": 1401884467,
                "end_time": 1401884646,
                "start_city": {
                    "latitude": 37.7749295,
                    "display_name": "San Francisco",
                    "longitude": -122.4194155
                },
                "product_id": "edf5e5eb-6ae6-44af-bec6-5bdcf1e3ed2c"
            }]
        }))
        .unwrap();

        assert_eq!(listing.remaining_count(), 5);
        let trips = listing.into_items();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].city(), "San Francisco");
        assert_eq!(trips[0].status.as_deref(), Some("completed"));
        assert_eq!(
            trips[0].started_at().map(|t| t.to_rfc3339()),
            Some("2014-06-04T12:21:07+00:00".to_string())
        );
        assert!(trips[0].ended_at().unwrap() > trips[0].started_at().unwrap());
    }
}
