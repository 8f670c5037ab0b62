//! Place API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{ApiVersion, UberClient};

use super::models::{Place, PlaceName, PlaceUpdate};

impl UberClient {
    /// Get a saved place
    pub async fn place(&self, name: PlaceName) -> Result<Place> {
        let url = self.url(
            ApiVersion::V1_2,
            &format!("{}/{}", api::PLACES, name),
            &[],
        )?;
        debug!("Fetching place: {}", url);
        self.send_json(self.get(url)).await
    }

    /// Set the address of a saved place
    pub async fn update_place(&self, name: PlaceName, address: &str) -> Result<Place> {
        let address = address.trim();
        if address.is_empty() {
            return Err(UberError::InvalidInput(
                "expecting a non-empty address".to_string(),
            ));
        }

        let url = self.url(
            ApiVersion::V1_2,
            &format!("{}/{}", api::PLACES, name),
            &[],
        )?;
        debug!("Updating place {}: {}", name, url);
        self.send_json(self.put(url).json(&PlaceUpdate { address }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_place() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/places/home"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": "685 Market St, San Francisco, CA 94103, USA"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let place = client.place(PlaceName::Home).await.unwrap();
        assert!(place.address().starts_with("685 Market St"));
    }

    #[tokio::test]
    async fn test_update_place() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1.2/places/work"))
            .and(body_json(serde_json::json!({"address": "1455 Market St"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "address": "1455 Market St"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let place = client
            .update_place(PlaceName::Work, "  1455 Market St ")
            .await
            .unwrap();
        assert_eq!(place.address(), "1455 Market St");
    }

    #[tokio::test]
    async fn test_update_place_blank_address() {
        let client = UberClient::with_base_url(None, "http://127.0.0.1:1");
        let err = client.update_place(PlaceName::Home, "  ").await.unwrap_err();
        assert!(matches!(err, UberError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_place_unknown_place_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/places/work"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "errors": [{"status": 404, "code": "unknown_place_id", "title": "Could not resolve the given place_id."}]
            })))
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let err = client.place(PlaceName::Work).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("unknown_place_id"));
    }
}
