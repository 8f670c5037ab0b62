//! Trip history API operations

use crate::config::api;
use crate::uber::client::{ApiVersion, UberClient};
use crate::uber::pagination::{Endpoint, PageStream, Pager};

use super::models::{Trip, TripListing};

impl UberClient {
    /// Stream the rider's trip history
    pub fn list_history(&self, pager: Option<Pager>) -> PageStream<Trip> {
        let endpoint = Endpoint::new(api::HISTORY, ApiVersion::V1_2);
        self.paginate::<Trip, TripListing>(endpoint, pager.unwrap_or_default())
    }

    /// Stream the whole trip history with default paging
    pub fn list_all_history(&self) -> PageStream<Trip> {
        self.list_history(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uber::credentials::Credential;
    use crate::uber::pagination::Throttle;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn trip_page(offset: i64) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "count": 100,
            "limit": 10,
            "offset": offset,
            "history": [{"request_id": format!("req-{}", offset), "status": "completed"}]
        }))
    }

    #[tokio::test]
    async fn test_list_history_pages() {
        let mock_server = MockServer::start().await;

        for offset in [0, 10, 20, 30] {
            Mock::given(method("GET"))
                .and(path("/v1.2/history"))
                .and(query_param("limit", "10"))
                .and(query_param("offset", offset.to_string()))
                .and(header("Authorization", "Bearer history-token"))
                .respond_with(trip_page(offset))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = UberClient::with_base_url(
            Some(Credential::Bearer("history-token".to_string())),
            mock_server.uri(),
        );
        let mut stream = client.list_history(Some(Pager {
            limit_per_page: 10,
            start_offset: 0,
            max_pages: 4,
            throttle: Throttle::Disabled,
        }));

        let mut seen = Vec::new();
        while let Some(page) = stream.next_page().await {
            assert!(page.error.is_none());
            assert_eq!(page.page_number as usize, seen.len());
            seen.extend(page.items.into_iter().filter_map(|t| t.request_id));
        }
        assert_eq!(seen, vec!["req-0", "req-10", "req-20", "req-30"]);
    }

    #[tokio::test]
    async fn test_list_all_history_uses_defaults() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/history"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0, "history": []
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let trips = client.list_all_history().collect_items().await.unwrap();
        assert!(trips.is_empty());
    }
}
