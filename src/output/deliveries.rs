//! Delivery output

use chrono::DateTime;

use super::TableRow;
use crate::uber::deliveries::Delivery;
use crate::uber::models::display_or_dash;

impl TableRow for Delivery {
    const HEADERS: &'static [&'static str] =
        &["DELIVERY ID", "STATUS", "FEE", "CURRENCY", "ITEMS", "CREATED"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            display_or_dash(self.status.as_deref()),
            display_or_dash(self.fee),
            display_or_dash(self.currency_code.as_deref()),
            self.items.iter().map(|i| i.quantity.max(0)).sum::<i64>().to_string(),
            display_or_dash(
                self.created_at
                    .and_then(|secs| i64::try_from(secs).ok())
                    .and_then(|secs| DateTime::from_timestamp(secs, 0))
                    .map(|t| t.to_rfc3339()),
            ),
        ]
    }
}
