//! Ride request API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{segment, ApiVersion, UberClient};
use crate::uber::estimates::UpfrontFare;

use super::models::{Receipt, Ride, RideMap, RideRequest, RideRequestBody};

impl UberClient {
    /// Request a ride for an already quoted fare
    pub async fn request_ride(&self, req: &RideRequest) -> Result<Ride> {
        req.validate()?;
        let url = self.url(ApiVersion::V1_2, api::REQUESTS, &[])?;
        debug!("Requesting ride: {}", url);

        let ride: Ride = self
            .send_json(self.post_authenticated(url)?.json(&RideRequestBody::from(req)))
            .await?;
        info!("Ride {} requested", ride.request_id);
        Ok(ride)
    }

    /// Request a ride, quoting a fare first when none is attached
    ///
    /// `prompt` sees the quoted fare and aborts the request by returning an
    /// error. It is not called when `req` already carries a fare ID.
    pub async fn request_ride_with_prompt<F>(&self, req: &RideRequest, prompt: F) -> Result<Ride>
    where
        F: FnOnce(&UpfrontFare) -> Result<()>,
    {
        if req.has_fare_id() {
            return self.request_ride(req).await;
        }

        let fare = self.upfront_fare(&req.estimate_request()).await?;
        let mut quoted = req.clone();
        quoted.fare_id = fare.fare_id().map(str::to_string);
        if quoted.product_id.as_deref().is_none_or(str::is_empty) {
            quoted.product_id = fare.product_id().map(str::to_string);
        }
        debug!("Quoted fare {:?} for product {:?}", quoted.fare_id, quoted.product_id);

        prompt(&fare)?;
        self.request_ride(&quoted).await
    }

    /// Get the receipt of a completed ride
    pub async fn request_receipt(&self, request_id: &str) -> Result<Receipt> {
        let url = self.request_url(request_id, "receipt")?;
        debug!("Fetching receipt: {}", url);
        self.send_json(self.get(url)).await
    }

    /// Get the live map link of a ride
    pub async fn request_map(&self, request_id: &str) -> Result<RideMap> {
        let url = self.request_url(request_id, "map")?;
        debug!("Fetching ride map: {}", url);

        let map: RideMap = self.send_json(self.get(url)).await?;
        if map == RideMap::default() {
            return Err(UberError::Json(format!("no such map for request '{}'", request_id.trim())));
        }
        Ok(map)
    }

    fn request_url(&self, request_id: &str, resource: &str) -> Result<reqwest::Url> {
        let request_id = request_id.trim();
        if request_id.is_empty() {
            return Err(UberError::InvalidInput(
                "expecting a non-empty request ID".to_string(),
            ));
        }
        self.url(
            ApiVersion::V1_2,
            &format!("{}/{}/{}", api::REQUESTS, segment(request_id), resource),
            &[],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::credentials::Credential;
    use crate::uber::models::Coordinates;
    use crate::uber::places::PlaceName;
    use std::cell::Cell;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> UberClient {
        UberClient::with_base_url(
            Some(Credential::Bearer("ride-token".to_string())),
            server.uri(),
        )
    }

    fn trip() -> RideRequest {
        RideRequest {
            start: Some(Coordinates::new(37.7752315, -122.418075)),
            end_place: Some(PlaceName::Work),
            ..RideRequest::default()
        }
    }

    async fn mount_fare(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/v1.2/requests/estimate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fare": {"fare_id": "fare-42", "display": "$7.10"},
                "trip": {"product_id": "p-9"},
                "pickup_estimate": 3
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_request_ride_with_prompt_attaches_fare() {
        let mock_server = MockServer::start().await;
        mount_fare(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/v1.2/requests"))
            .and(header("Authorization", "Bearer ride-token"))
            .and(body_partial_json(serde_json::json!({
                "fare_id": "fare-42",
                "product_id": "p-9",
                "end_place_id": "work"
            })))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "request_id": "852b8fdd-4369-4659-9628-e122662ad257",
                "product_id": "p-9",
                "status": "processing",
                "eta": 5
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let prompted = Cell::new(false);
        let ride = client
            .request_ride_with_prompt(&trip(), |fare| {
                assert_eq!(fare.display_amount(), "$7.10");
                prompted.set(true);
                Ok(())
            })
            .await
            .unwrap();

        assert!(prompted.get());
        assert_eq!(ride.status.as_deref(), Some("processing"));
        assert_eq!(ride.eta_minutes, Some(5));
    }

    #[tokio::test]
    async fn test_declined_prompt_sends_no_ride() {
        let mock_server = MockServer::start().await;
        mount_fare(&mock_server).await;

        Mock::given(method("POST"))
            .and(path("/v1.2/requests"))
            .respond_with(ResponseTemplate::new(202))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .request_ride_with_prompt(&trip(), |_| {
                Err(UberError::InvalidInput("declined".to_string()))
            })
            .await;
        assert!(matches!(result, Err(UberError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_request_ride_without_fare_id() {
        let mock_server = MockServer::start().await;
        let client = client_for(&mock_server);

        let err = client.request_ride(&trip()).await.unwrap_err();
        assert_eq!(err.actionable().map(|ae| ae.signature), Some("invalid_fare_id"));
    }

    #[tokio::test]
    async fn test_request_ride_requires_token() {
        let mock_server = MockServer::start().await;
        let client = UberClient::with_base_url(None, mock_server.uri());

        let mut req = trip();
        req.fare_id = Some("fare-1".to_string());
        assert!(matches!(
            client.request_ride(&req).await,
            Err(UberError::TokenNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_request_ride_surfaces_structured_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.2/requests"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "meta": {},
                "errors": [{"status": 409, "code": "current_trip_exists", "title": "The user is currently on a trip."}]
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut req = trip();
        req.fare_id = Some("fare-1".to_string());
        let err = client.request_ride(&req).await.unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.actionable().map(|ae| ae.signature),
            Some("current_trip_exists")
        );
    }

    #[tokio::test]
    async fn test_request_receipt() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/requests/b5512127-a134-4bf4-b1ba-fe9f48f56d9d/receipt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "request_id": "b5512127-a134-4bf4-b1ba-fe9f48f56d9d",
                "subtotal": "$12.78",
                "total_charged": "$5.92",
                "total_owed": null,
                "total_fare": "$12.79",
                "currency_code": "USD",
                "duration": "00:11:35",
                "distance": "1.49",
                "distance_label": "miles"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let receipt = client
            .request_receipt("b5512127-a134-4bf4-b1ba-fe9f48f56d9d")
            .await
            .unwrap();
        assert_eq!(receipt.total_charged.as_deref(), Some("$5.92"));
        assert_eq!(receipt.total_owed, None);
        assert_eq!(receipt.distance_unit.as_deref(), Some("miles"));

        assert!(matches!(
            client.request_receipt(" ").await,
            Err(UberError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_request_map() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/requests/r-1/map"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "request_id": "r-1",
                "href": "https://trip.uber.com/abc123"
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1.2/requests/r-2/map"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let map = client.request_map("r-1").await.unwrap();
        assert_eq!(map.url, "https://trip.uber.com/abc123");
        assert!(matches!(
            client.request_map("r-2").await,
            Err(UberError::Json(_))
        ));
    }
}
