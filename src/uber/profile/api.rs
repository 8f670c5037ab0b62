//! Profile API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{ApiVersion, UberClient};

use super::models::{Profile, PromoCode, PromoCodeRequest};

impl UberClient {
    /// Get the authenticated rider's profile
    pub async fn my_profile(&self) -> Result<Profile> {
        self.fetch_profile(ApiVersion::V1_2, api::PROFILE).await
    }

    /// Get the authenticated driver's profile
    pub async fn driver_profile(&self) -> Result<Profile> {
        self.fetch_profile(ApiVersion::V1, api::DRIVER_PROFILE).await
    }

    async fn fetch_profile(&self, version: ApiVersion, path: &str) -> Result<Profile> {
        let url = self.url(version, path, &[])?;
        debug!("Fetching profile: {}", url);
        self.send_json(self.get(url)).await
    }

    /// Apply a promotion code to the rider's account
    pub async fn apply_promo_code(&self, code: &str) -> Result<PromoCode> {
        let code = code.trim();
        if code.is_empty() {
            return Err(UberError::InvalidInput(
                "expecting a non-empty promoCode".to_string(),
            ));
        }

        let url = self.url(ApiVersion::V1_2, api::PROFILE, &[])?;
        debug!("Applying promo code: {}", url);
        self.send_json(self.patch(url).json(&PromoCodeRequest { code }))
            .await
    }
}
