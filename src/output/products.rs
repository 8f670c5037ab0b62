//! Product output

use super::TableRow;
use crate::uber::models::display_or_dash;
use crate::uber::products::Product;

impl TableRow for Product {
    const HEADERS: &'static [&'static str] = &[
        "NAME",
        "CAPACITY",
        "SHARED",
        "UPFRONT FARE",
        "BASE",
        "PER MIN",
        "PER DISTANCE",
        "PRODUCT ID",
    ];

    fn cells(&self) -> Vec<String> {
        let details = self.price_details.as_ref();
        vec![
            self.display_name.clone(),
            self.capacity.to_string(),
            self.shared.to_string(),
            self.upfront_fare_enabled.to_string(),
            display_or_dash(details.and_then(|d| d.base)),
            display_or_dash(details.and_then(|d| d.cost_per_minute)),
            display_or_dash(details.and_then(|d| {
                d.cost_per_distance_unit.map(|cost| match d.distance_unit.as_deref() {
                    Some(unit) => format!("{}/{}", cost, unit),
                    None => cost.to_string(),
                })
            })),
            self.id.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::products::PriceDetails;

    #[test]
    fn test_product_cells() {
        let product = Product {
            id: "p-1".to_string(),
            display_name: "uberX".to_string(),
            capacity: 4,
            price_details: Some(PriceDetails {
                cost_per_distance_unit: Some(1.15),
                distance_unit: Some("mile".to_string()),
                ..PriceDetails::default()
            }),
            ..Product::default()
        };
        let cells = product.cells();
        assert_eq!(cells[1], "4");
        assert_eq!(cells[4], "-");
        assert_eq!(cells[6], "1.15/mile");
        assert_eq!(cells[7], "p-1");
    }
}
