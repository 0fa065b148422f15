use crate::models::Item;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the platform backend
#[derive(Debug, Error)]
pub enum ItemsApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only client for the backend's found-item search
///
/// Only `GET /api/found-items` is used; the backend owns its contract.
pub struct ItemsApiClient {
    base_url: String,
    client: Client,
}

impl ItemsApiClient {
    /// Create a new client
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ItemsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search found items by free text
    ///
    /// A response without an `items` array is treated as no results.
    /// Entries that do not parse as items are skipped.
    pub async fn search_found_items(
        &self,
        search: &str,
        limit: u32,
    ) -> Result<Vec<Item>, ItemsApiError> {
        let url = format!(
            "{}/api/found-items?limit={}&search={}",
            self.base_url.trim_end_matches('/'),
            limit,
            urlencoding::encode(search)
        );

        tracing::debug!("Searching found items: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Found item search failed for {:?}: {}", search, status);
            return Err(ItemsApiError::ApiError(format!(
                "Failed to fetch found items: {}",
                status
            )));
        }

        let json: Value = response.json().await?;

        if !json.is_object() {
            return Err(ItemsApiError::InvalidResponse("Expected a JSON object".into()));
        }

        let items: Vec<Item> = json
            .get("items")
            .and_then(|items| items.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!("Fetched {} found items for {:?}", items.len(), search);

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_api_client_creation() {
        let client = ItemsApiClient::new("http://localhost:5000".to_string(), 10).unwrap();

        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_search_found_items() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/found-items")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "100".into()),
                mockito::Matcher::UrlEncoded("search".into(), "Blue Backpack".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"items": [{"id": 7, "type": "FOUND", "title": "Blue Backpack"}, "garbage"]}"#)
            .create_async()
            .await;

        let client = ItemsApiClient::new(server.url(), 5).unwrap();
        let items = client.search_found_items("Blue Backpack", 100).await.unwrap();

        mock.assert_async().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), Some("Blue Backpack"));
    }

    #[tokio::test]
    async fn test_missing_items_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/found-items")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"total": 0}"#)
            .create_async()
            .await;

        let client = ItemsApiClient::new(server.url(), 5).unwrap();
        let items = client.search_found_items("Keys", 100).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_backend_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/found-items")
            .match_query(mockito::Matcher::Any)
            .with_status(503)
            .create_async()
            .await;

        let client = ItemsApiClient::new(server.url(), 5).unwrap();
        let result = client.search_found_items("Keys", 100).await;

        assert!(matches!(result, Err(ItemsApiError::ApiError(_))));
    }
}
