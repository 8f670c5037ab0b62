//! Product data models

use serde::{Deserialize, Serialize};

use crate::uber::models::ServiceFee;

/// A ride product offered at a location (UberX, POOL, ...)
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Product {
    #[serde(rename = "product_id", default)]
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub cash_enabled: bool,
    #[serde(default)]
    pub upfront_fare_enabled: bool,
    #[serde(rename = "image", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_details: Option<PriceDetails>,
}

impl Product {
    pub(crate) fn is_blank(&self) -> bool {
        *self == Product::default()
    }
}

/// Rate card of a product
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceDetails {
    #[serde(default)]
    pub base: Option<f64>,
    #[serde(default)]
    pub minimum: Option<f64>,
    #[serde(default)]
    pub cost_per_minute: Option<f64>,
    #[serde(rename = "cost_per_distance", default)]
    pub cost_per_distance_unit: Option<f64>,
    /// "mile" or "km"
    #[serde(default)]
    pub distance_unit: Option<String>,
    #[serde(default)]
    pub cancellation_fee: Option<f64>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_fees: Vec<ServiceFee>,
}

/// Response of `GET /products`
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ProductListing {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "upfront_fare_enabled": true,
            "capacity": 2,
            "product_id": "26546650-e557-4a7b-86e7-6a3942445247",
            "price_details": {
                "service_fees": [{"fee": 1.55, "name": "Booking fee"}],
                "cost_per_minute": 0.22,
                "distance_unit": "mile",
                "minimum": 2.0,
                "cost_per_distance": 1.15,
                "base": 0.0,
                "cancellation_fee": 5.0,
                "currency_code": "USD"
            },
            "image": "http://d1a3f4spazzrp4.cloudfront.net/car.jpg",
            "cash_enabled": false,
            "shared": true,
            "short_description": "POOL",
            "display_name": "POOL",
            "description": "Share the ride, split the cost."
        }))
        .unwrap();

        assert_eq!(product.id, "26546650-e557-4a7b-86e7-6a3942445247");
        assert!(product.shared);
        assert_eq!(product.capacity, 2);
        let details = product.price_details.as_ref().unwrap();
        assert_eq!(details.cost_per_distance_unit, Some(1.15));
        assert_eq!(details.service_fees[0].name.as_deref(), Some("Booking fee"));
        assert!(!product.is_blank());
        assert!(Product::default().is_blank());
    }
}
