//! Payment data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::uber::models::{FareBreakdown, ServiceFee};

/// How a payment was made
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodKind {
    Airtel,
    Alipay,
    ApplePay,
    AmericanExpress,
    AndroidPay,
    #[serde(rename = "family_account")]
    UberFamilyAccount,
    Cash,
    Discover,
    Jcb,
    #[serde(rename = "lianlian")]
    LianLian,
    Maestro,
    Mastercard,
    Paypal,
    Paytm,
    Ucharge,
    #[serde(rename = "unionpay")]
    UnionPay,
    Visa,
    Zaakpay,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PaymentMethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodKind::Airtel => "airtel",
            PaymentMethodKind::Alipay => "alipay",
            PaymentMethodKind::ApplePay => "apple_pay",
            PaymentMethodKind::AmericanExpress => "american_express",
            PaymentMethodKind::AndroidPay => "android_pay",
            PaymentMethodKind::UberFamilyAccount => "family_account",
            PaymentMethodKind::Cash => "cash",
            PaymentMethodKind::Discover => "discover",
            PaymentMethodKind::Jcb => "jcb",
            PaymentMethodKind::LianLian => "lianlian",
            PaymentMethodKind::Maestro => "maestro",
            PaymentMethodKind::Mastercard => "mastercard",
            PaymentMethodKind::Paypal => "paypal",
            PaymentMethodKind::Paytm => "paytm",
            PaymentMethodKind::Ucharge => "ucharge",
            PaymentMethodKind::UnionPay => "unionpay",
            PaymentMethodKind::Visa => "visa",
            PaymentMethodKind::Zaakpay => "zaakpay",
            PaymentMethodKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PaymentMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment method on file, or a driver payment
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Payment {
    #[serde(rename = "payment_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "payment_method_id", default, skip_serializing_if = "Option::is_none")]
    pub method_id: Option<String>,
    /// fare, device_payment, vehicle_payment, promotion or other
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub method: PaymentMethodKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_collected: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<FareBreakdown>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rider_fees: Option<ServiceFee>,
}

/// Response of `GET /payment-methods`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PaymentListing {
    #[serde(rename = "payment_methods", default)]
    pub methods: Vec<Payment>,
    #[serde(rename = "last_used", default, skip_serializing_if = "Option::is_none")]
    pub last_used_id: Option<String>,
}
