//! Payment method API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::uber::client::{ApiVersion, UberClient};

use super::models::PaymentListing;

impl UberClient {
    /// List the rider's payment methods
    pub async fn list_payment_methods(&self) -> Result<PaymentListing> {
        let url = self.url(ApiVersion::V1_2, api::PAYMENT_METHODS, &[])?;
        debug!("Fetching payment methods: {}", url);
        self.send_json(self.get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UberError;
    use crate::uber::credentials::Credential;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_payment_methods() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/payment-methods"))
            .and(header("Accept-Language", "en_US"))
            .and(header("Authorization", "Bearer pay-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "payment_methods": [{"payment_method_id": "pm-1", "type": "visa", "description": "***23"}],
                "last_used": "pm-1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(
            Some(Credential::Bearer("pay-token".to_string())),
            mock_server.uri(),
        );
        let listing = client.list_payment_methods().await.unwrap();
        assert_eq!(listing.methods[0].method.as_str(), "visa");
        assert_eq!(listing.last_used_id.as_deref(), Some("pm-1"));
    }

    #[tokio::test]
    async fn test_unauthorized_without_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/payment-methods"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        match client.list_payment_methods().await {
            Err(UberError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "401 Unauthorized");
            }
            other => panic!("Expected generic coded error, got {:?}", other),
        }
    }
}
