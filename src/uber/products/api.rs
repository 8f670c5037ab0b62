//! Product API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, UberError};
use crate::uber::client::{segment, ApiVersion, UberClient};
use crate::uber::models::Coordinates;

use super::models::{Product, ProductListing};

impl UberClient {
    /// List the products available at a location
    pub async fn list_products(&self, at: Coordinates) -> Result<Vec<Product>> {
        let query = [
            ("latitude".to_string(), at.latitude.to_string()),
            ("longitude".to_string(), at.longitude.to_string()),
        ];
        let url = self.url(ApiVersion::V1_2, api::PRODUCTS, &query)?;
        debug!("Fetching products: {}", url);

        let listing: ProductListing = self.send_json(self.get(url)).await?;
        debug!("Found {} product(s)", listing.products.len());
        Ok(listing.products)
    }

    /// Get one product by ID
    pub async fn product_by_id(&self, product_id: &str) -> Result<Product> {
        let product_id = product_id.trim();
        if product_id.is_empty() {
            return Err(UberError::InvalidInput(
                "expecting a non-empty productID".to_string(),
            ));
        }

        let url = self.url(
            ApiVersion::V1_2,
            &format!("{}/{}", api::PRODUCTS, segment(product_id)),
            &[],
        )?;
        debug!("Fetching product: {}", url);

        let product: Product = self.send_json(self.get(url)).await?;
        if product.is_blank() {
            return Err(UberError::Json(
                "received a blank product back from the server".to_string(),
            ));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_products() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/products"))
            .and(query_param("latitude", "37.7759792"))
            .and(query_param("longitude", "-122.41823"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "products": [
                    {"product_id": "a1111c8c-c720-46c3-8534-2fcdd730040d", "display_name": "uberX"},
                    {"product_id": "821415d8-3bd5-4e27-9604-194e4359a449", "display_name": "uberXL"}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let products = client
            .list_products(Coordinates::new(37.7759792, -122.41823))
            .await
            .unwrap();

        let names: Vec<&str> = products.iter().map(|p| p.display_name.as_str()).collect();
        assert_eq!(names, vec!["uberX", "uberXL"]);
    }

    #[tokio::test]
    async fn test_product_by_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/products/a1111c8c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "product_id": "a1111c8c", "display_name": "uberX", "capacity": 4
            })))
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let product = client.product_by_id(" a1111c8c ").await.unwrap();
        assert_eq!(product.capacity, 4);
    }

    #[tokio::test]
    async fn test_product_by_id_rejects_blank_id() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let result = client.product_by_id("   ").await;
        assert!(matches!(result, Err(UberError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_product_by_id_blank_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.2/products/gone"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let client = UberClient::with_base_url(None, mock_server.uri());
        let result = client.product_by_id("gone").await;
        assert!(matches!(result, Err(UberError::Json(_))));
    }
}
