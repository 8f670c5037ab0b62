//! Ride and receipt output

use super::TableRow;
use crate::uber::models::display_or_dash;
use crate::uber::rides::{Receipt, Ride};

impl TableRow for Ride {
    const HEADERS: &'static [&'static str] =
        &["REQUEST ID", "STATUS", "ETA (MIN)", "DRIVER", "VEHICLE", "SURGE"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.request_id.clone(),
            display_or_dash(self.status.as_deref()),
            display_or_dash(self.eta_minutes),
            display_or_dash(self.driver.as_ref().map(|d| d.name.as_str())),
            display_or_dash(self.vehicle.as_ref().map(|v| {
                format!("{} {} ({})", v.make, v.model, v.license_plate)
                    .trim()
                    .to_string()
            })),
            display_or_dash(self.surge_multiplier),
        ]
    }
}

impl TableRow for Receipt {
    const HEADERS: &'static [&'static str] = &[
        "REQUEST ID",
        "TOTAL CHARGED",
        "TOTAL FARE",
        "SUBTOTAL",
        "DURATION",
        "DISTANCE",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.request_id.clone(),
            display_or_dash(self.total_charged.as_deref()),
            display_or_dash(self.total_fare.as_deref()),
            display_or_dash(self.subtotal.as_deref()),
            display_or_dash(self.duration.as_deref()),
            display_or_dash(self.distance.as_ref().map(|d| match &self.distance_unit {
                Some(unit) => format!("{} {}", d, unit),
                None => d.clone(),
            })),
        ]
    }
}
