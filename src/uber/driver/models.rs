//! Driver payment query and listing models

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, UberError};
use crate::uber::pagination::Pager;
use crate::uber::payments::Payment;
use crate::uber::traits::PaginatedResponse;

/// Which driver payments to list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPaymentsQuery {
    /// Only payments at or after this time
    pub from: Option<DateTime<Utc>>,
    /// Only payments before this time
    pub to: Option<DateTime<Utc>>,
    pub pager: Pager,
}

impl DriverPaymentsQuery {
    pub(crate) fn validate(&self) -> Result<()> {
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(UberError::InvalidInput(format!(
                    "from_time {} is after to_time {}",
                    from.to_rfc3339(),
                    to.to_rfc3339()
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(from) = self.from {
            pairs.push(("from_time".to_string(), from.timestamp().to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to_time".to_string(), to.timestamp().to_string()));
        }
        pairs
    }
}

/// One page of `GET /partners/payments`
#[derive(Deserialize, Debug)]
pub struct DriverPaymentListing {
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

impl PaginatedResponse<Payment> for DriverPaymentListing {
    fn remaining_count(&self) -> i64 {
        self.count.unwrap_or(self.payments.len() as i64)
    }

    fn into_items(self) -> Vec<Payment> {
        self.payments
    }

    fn is_last_page(&self) -> bool {
        self.payments.is_empty()
    }
}
