use super::{ImageResult, ImageSource, SuggestionClient};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Unsplash caps `per_page` for search; we never need more than this anyway.
const MAX_PER_PAGE: usize = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: Option<String>,
}

/// Live image strategy: one search call per campaign, first results win.
pub struct UnsplashClient {
    client: Client,
    access_key: String,
    base_url: String,
    timeout: Duration,
}

impl UnsplashClient {
    pub fn new(access_key: String) -> Self {
        Self::new_with_client(access_key, Client::new())
    }

    pub fn new_with_client(access_key: String, client: Client) -> Self {
        Self {
            client,
            access_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn search(&self, query: &str, per_page: usize) -> Result<SearchResponse> {
        let url = format!("{}/search/photos", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .header("Accept-Version", "v1")
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&[
                ("query", query),
                ("per_page", &per_page.to_string()),
                ("orientation", "landscape"),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Unsplash: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Unsplash API error (status {}): {}", status, error_text);
            return Err(Error::Provider(format!(
                "Unsplash API error (status {}): {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Unsplash response: {}\nBody: {}", e, body);
            Error::Provider(format!("Failed to parse Unsplash response: {}", e))
        })
    }
}

#[async_trait]
impl ImageSource for UnsplashClient {
    async fn resolve(&self, query: &str, limit: usize) -> Result<Vec<ImageResult>> {
        let per_page = limit.clamp(1, MAX_PER_PAGE);
        let response = self.search(query, per_page).await?;

        if response.results.is_empty() {
            tracing::info!("Unsplash returned no hits for '{}', suggesting instead", query);
            return SuggestionClient::new().resolve(query, limit).await;
        }

        Ok(response
            .results
            .into_iter()
            .take(limit.max(1))
            .map(|photo| ImageResult {
                query: query.to_string(),
                url: photo.urls.regular,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer, access_key: &str) -> UnsplashClient {
        UnsplashClient::new(access_key.to_string()).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_resolve_returns_first_results_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("query", "coffee shop"))
            .and(query_param("orientation", "landscape"))
            .and(header("Authorization", "Client-ID test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    { "urls": { "regular": "https://images.unsplash.com/a.jpg" } },
                    { "urls": { "regular": "https://images.unsplash.com/b.jpg" } }
                ]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let results = client.resolve("coffee shop", 2).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].url.as_deref(),
            Some("https://images.unsplash.com/a.jpg")
        );
        assert_eq!(
            results[1].url.as_deref(),
            Some("https://images.unsplash.com/b.jpg")
        );
        assert!(results.iter().all(|r| r.query == "coffee shop"));
    }

    #[tokio::test]
    async fn test_per_page_is_clamped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .and(query_param("per_page", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [{ "urls": { "regular": "https://images.unsplash.com/a.jpg" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        client.resolve("coffee shop", 20).await.unwrap();
    }

    #[tokio::test]
    async fn test_api_error_returns_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key");
        let err = client.resolve("coffee shop", 1).await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[tokio::test]
    async fn test_empty_results_degrade_to_suggestions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/photos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": []
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key");
        let results = client.resolve("nonexistent thing", 2).await.unwrap();

        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.url.is_none()));
    }
}
