//! Data models shared across Uber resources

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Postal location of a ride, pickup or dropoff
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<i32>,
    #[serde(rename = "address", default, skip_serializing_if = "Option::is_none")]
    pub primary_address: Option<String>,
    #[serde(rename = "address_2", default, skip_serializing_if = "Option::is_none")]
    pub secondary_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// One line of a fare breakdown
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FareBreakdown {
    #[serde(rename = "low_amount", default)]
    pub low: Option<f64>,
    #[serde(rename = "high_amount", default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub display_amount: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A named fee
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ServiceFee {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fee: Option<f64>,
}

/// Format an optional value for display, `-` when absent
pub fn display_or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
