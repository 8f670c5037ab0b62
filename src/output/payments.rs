//! Payment output

use chrono::DateTime;

use super::TableRow;
use crate::uber::models::display_or_dash;
use crate::uber::payments::Payment;

impl TableRow for Payment {
    const HEADERS: &'static [&'static str] = &[
        "ID",
        "TYPE",
        "CATEGORY",
        "DESCRIPTION",
        "AMOUNT",
        "CURRENCY",
        "EVENT TIME",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            display_or_dash(self.id.as_deref().or(self.method_id.as_deref())),
            self.method.to_string(),
            display_or_dash(self.category.as_deref()),
            display_or_dash(self.description.as_deref()),
            display_or_dash(self.amount),
            display_or_dash(self.currency_code.as_deref()),
            display_or_dash(
                self.event_time
                    .and_then(|secs| DateTime::from_timestamp(secs as i64, 0))
                    .map(|t| t.to_rfc3339()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::payments::PaymentMethodKind;

    #[test]
    fn test_payment_cells() {
        let payment = Payment {
            method_id: Some("pm-1".to_string()),
            method: PaymentMethodKind::Visa,
            description: Some("***23".to_string()),
            event_time: Some(1502395663.0),
            ..Payment::default()
        };
        let cells = payment.cells();
        assert_eq!(cells[0], "pm-1");
        assert_eq!(cells[1], "visa");
        assert_eq!(cells[4], "-");
        assert_eq!(cells[6], "2017-08-10T20:07:43+00:00");
    }
}
