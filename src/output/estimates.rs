//! Price, time and upfront fare output

use serde::Serialize;

use super::TableRow;
use crate::uber::estimates::{PriceEstimate, TimeEstimate, UpfrontFare};
use crate::uber::models::display_or_dash;
use crate::uber::products::Product;

impl TableRow for PriceEstimate {
    const HEADERS: &'static [&'static str] =
        &["PRODUCT", "ESTIMATE", "DURATION (S)", "SURGE", "PRODUCT ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            display_or_dash(self.estimate.as_deref()),
            display_or_dash(self.duration_seconds),
            display_or_dash(self.surge_multiplier),
            self.product_id.clone(),
        ]
    }
}

impl TableRow for TimeEstimate {
    const HEADERS: &'static [&'static str] = &["PRODUCT", "ETA (MIN)", "PRODUCT ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            display_or_dash(self.eta_seconds.map(|s| format!("{:.1}", s / 60.0))),
            self.product_id.clone(),
        ]
    }
}

/// An upfront fare paired with the product it was quoted for
#[derive(Serialize, Debug, Clone)]
pub struct FareRow {
    pub product_id: String,
    pub display_name: String,
    pub fare: UpfrontFare,
}

impl FareRow {
    pub fn new(product: &Product, fare: UpfrontFare) -> Self {
        Self {
            product_id: product.id.clone(),
            display_name: product.display_name.clone(),
            fare,
        }
    }
}

impl std::fmt::Display for FareRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.display_name, self.fare.display_amount())?;
        if self.fare.surge_in_effect() {
            write!(f, " (surge)")?;
        }
        Ok(())
    }
}

impl TableRow for FareRow {
    const HEADERS: &'static [&'static str] =
        &["PRODUCT", "FARE", "PICKUP (MIN)", "SURGE", "PRODUCT ID"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.display_name.clone(),
            self.fare.display_amount().to_string(),
            display_or_dash(self.fare.pickup_estimate_minutes),
            if self.fare.surge_in_effect() { "yes" } else { "no" }.to_string(),
            self.product_id.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::estimates::Fare;

    #[test]
    fn test_time_estimate_minutes() {
        let estimate = TimeEstimate {
            product_id: "p-1".to_string(),
            display_name: "UberX".to_string(),
            eta_seconds: Some(410.0),
            ..TimeEstimate::default()
        };
        assert_eq!(estimate.cells(), vec!["UberX", "6.8", "p-1"]);
    }

    #[test]
    fn test_fare_row_display() {
        let row = FareRow {
            product_id: "p-1".to_string(),
            display_name: "UberPOOL".to_string(),
            fare: UpfrontFare {
                fare: Some(Fare {
                    display_amount: Some("$4.20".to_string()),
                    ..Fare::default()
                }),
                pickup_estimate_minutes: Some(3.0),
                ..UpfrontFare::default()
            },
        };
        assert_eq!(row.to_string(), "UberPOOL $4.20");
        assert_eq!(row.cells()[2], "3");
        assert_eq!(row.cells()[3], "no");
    }
}
