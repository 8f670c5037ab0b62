//! Estimate API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{ApiVersion, UberClient};
use crate::uber::pagination::{Endpoint, PageStream};

use super::models::{
    EstimateRequest, PriceEstimate, PriceListing, TimeEstimate, TimeListing, UpfrontFare,
    UpfrontFareBody,
};

impl UberClient {
    /// Stream price estimates for a trip
    ///
    /// The request is validated before any fetching starts.
    pub fn estimate_price(&self, req: &EstimateRequest) -> Result<PageStream<PriceEstimate>> {
        req.validate_for_price()?;
        let mut endpoint = Endpoint::new(api::PRICE_ESTIMATES, ApiVersion::V1_2);
        endpoint.query = req.query_pairs(true);
        Ok(self.paginate::<PriceEstimate, PriceListing>(endpoint, req.pager.clone()))
    }

    /// Stream pickup time estimates at the start location
    pub fn estimate_time(&self, req: &EstimateRequest) -> Result<PageStream<TimeEstimate>> {
        req.validate_for_time()?;
        let mut endpoint = Endpoint::new(api::TIME_ESTIMATES, ApiVersion::V1_2);
        endpoint.query = req.query_pairs(false);
        Ok(self.paginate::<TimeEstimate, TimeListing>(endpoint, req.pager.clone()))
    }

    /// Quote an upfront fare for a trip
    pub async fn upfront_fare(&self, req: &EstimateRequest) -> Result<UpfrontFare> {
        req.validate_for_upfront_fare()?;
        let url = self.url(ApiVersion::V1_2, api::UPFRONT_FARE, &[])?;
        debug!("Requesting upfront fare: {}", url);

        let fare: UpfrontFare = self
            .send_json(self.post(url).json(&UpfrontFareBody::from(req)))
            .await?;
        if fare.is_blank() {
            return Err(UberError::Json(
                "received a blank upfront fare back from the server".to_string(),
            ));
        }
        Ok(fare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::credentials::Credential;
    use crate::uber::models::Coordinates;
    use crate::uber::pagination::{Pager, Throttle};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn trip() -> EstimateRequest {
        let mut req = EstimateRequest::between(
            Coordinates::new(37.7752315, -122.418075),
            Coordinates::new(37.7752415, -122.518075),
        );
        req.pager = Pager {
            throttle: Throttle::Disabled,
            ..Pager::default()
        };
        req
    }

    async fn untouched_server() -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[tokio::test]
    async fn test_estimate_price() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/estimates/price"))
            .and(query_param("start_latitude", "37.7752315"))
            .and(query_param("end_longitude", "-122.518075"))
            .and(query_param("seat_count", "2"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0,
                "prices": [{
                    "product_id": "08f17084-23fd-4103-aa3e-9b660223934b",
                    "currency_code": "USD",
                    "display_name": "UberBLACK",
                    "estimate": "$23-29",
                    "low_estimate": 23,
                    "high_estimate": 29,
                    "surge_multiplier": 1,
                    "duration": 640,
                    "distance": 5.34
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let mut req = trip();
        req.seat_count = 2;
        let prices = client
            .estimate_price(&req)
            .unwrap()
            .collect_items()
            .await
            .unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].estimate.as_deref(), Some("$23-29"));
        assert_eq!(prices[0].duration_seconds, Some(640.0));
    }

    #[tokio::test]
    async fn test_estimate_time_omits_seat_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/estimates/time"))
            .and(query_param("start_latitude", "37.7752315"))
            .and(query_param("product_id", "p-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0,
                "times": [{"product_id": "p-1", "display_name": "UberX", "estimate": 410}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let mut req = EstimateRequest::at(Coordinates::new(37.7752315, -122.418075));
        req.seat_count = 2;
        req.product_id = Some("p-1".to_string());
        let times = client
            .estimate_time(&req)
            .unwrap()
            .collect_items()
            .await
            .unwrap();
        assert_eq!(times[0].eta_seconds, Some(410.0));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests[0].url.query_pairs().all(|(k, _)| k != "seat_count"));
    }

    #[tokio::test]
    async fn test_invalid_estimates_fail_without_requests() {
        let mock_server = untouched_server().await;
        let client = UberClient::with_base_url(None, mock_server.uri());

        assert!(matches!(
            client.estimate_price(&EstimateRequest::default()),
            Err(UberError::InvalidInput(_))
        ));
        assert!(matches!(
            client.estimate_time(&EstimateRequest::default()),
            Err(UberError::InvalidInput(_))
        ));

        let mut too_many_seats = trip();
        too_many_seats.seat_count = 3;
        assert!(client.estimate_price(&too_many_seats).is_err());
        assert!(client.upfront_fare(&too_many_seats).await.is_err());
    }

    #[tokio::test]
    async fn test_upfront_fare() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.2/requests/estimate"))
            .and(header("Authorization", "Bearer fare-token"))
            .and(body_json(serde_json::json!({
                "start_latitude": 37.7752315,
                "start_longitude": -122.418075,
                "end_latitude": 37.7752415,
                "end_longitude": -122.518075,
                "product_id": "p-1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fare": {
                    "value": 5.73,
                    "fare_id": "d30e732b8bba22c9cdc10513ee86380087cb4a6f89e37ad21ba2a39f3a1ba960",
                    "expires_at": 1476953293,
                    "display": "$5.73",
                    "currency_code": "USD"
                },
                "trip": {"distance_unit": "mile", "duration_estimate": 540, "distance_estimate": 2.39},
                "pickup_estimate": 2
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(
            Some(Credential::Bearer("fare-token".to_string())),
            mock_server.uri(),
        );
        let mut req = trip();
        req.product_id = Some("p-1".to_string());
        let fare = client.upfront_fare(&req).await.unwrap();

        assert_eq!(fare.display_amount(), "$5.73");
        assert!(fare.fare_id().is_some());
        assert!(!fare.surge_in_effect());
        assert!(!fare.no_cars_available());
    }

    #[tokio::test]
    async fn test_upfront_fare_blank_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1.2/requests/estimate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        assert!(matches!(
            client.upfront_fare(&trip()).await,
            Err(UberError::Json(_))
        ));
    }
}
