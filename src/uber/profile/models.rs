//! Rider and driver profile models

use serde::{Deserialize, Serialize};

/// Profile of the authenticated rider or driver
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Profile {
    #[serde(rename = "uuid", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "picture", default, skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub mobile_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Drivers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_status: Option<ActivationStatus>,
    /// Drivers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Onboarding state of a driver account
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Onboarding,
    Active,
    Inactive,
    #[serde(other)]
    Other,
}

impl ActivationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationStatus::Onboarding => "onboarding",
            ActivationStatus::Active => "active",
            ActivationStatus::Inactive => "inactive",
            ActivationStatus::Other => "other",
        }
    }
}

/// A promotion code applied to the rider's account
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PromoCode {
    #[serde(rename = "promo_code", default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Debug)]
pub(crate) struct PromoCodeRequest<'a> {
    #[serde(rename = "applied_promotion_codes")]
    pub code: &'a str,
}
