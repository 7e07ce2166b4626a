/// Game catalog search client
///
/// Looks up a single best match for a candidate title against a RAWG-style
/// catalog API. Each lookup carries a bounded timeout so one slow upstream
/// call cannot stall a whole enrichment batch.
use crate::{
    error::{AppError, AppResult},
    models::{CatalogSearchResponse, GameDetails},
};
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Trait for catalog metadata providers
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog for a title.
    ///
    /// Returns `Ok(None)` when the search succeeds but matches nothing;
    /// transport and non-success responses are errors the caller is expected
    /// to contain per candidate.
    async fn search_game(&self, title: &str) -> AppResult<Option<GameDetails>>;
}

#[derive(Clone)]
pub struct RawgClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl RawgClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for RawgClient {
    async fn search_game(&self, title: &str) -> AppResult<Option<GameDetails>> {
        let url = format!("{}/games", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("search", title),
                ("page_size", "1"),
            ])
            .send()
            .await
            .map_err(|e| AppError::CatalogLookup(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::CatalogLookup(format!(
                "Catalog API returned status {} for \"{}\"",
                status, title
            )));
        }

        let search: CatalogSearchResponse = response
            .json()
            .await
            .map_err(|e| AppError::CatalogLookup(format!("Unreadable catalog response: {}", e)))?;

        let details = search.results.into_iter().next().map(GameDetails::from);

        tracing::debug!(
            title = %title,
            matched = details.is_some(),
            "Catalog search completed"
        );

        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer) -> RawgClient {
        RawgClient::new(
            "test-key".to_string(),
            server.uri(),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_game_maps_first_result() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/games"))
            .and(query_param("search", "Stardew Valley"))
            .and(query_param("page_size", "1"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "results": [{
                    "slug": "stardew-valley",
                    "name": "Stardew Valley",
                    "background_image": "https://media.rawg.io/stardew.jpg",
                    "platforms": [{"platform": {"id": 4, "name": "PC", "slug": "pc"}}]
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let details = client.search_game("Stardew Valley").await.unwrap().unwrap();

        assert_eq!(details.slug, "stardew-valley");
        assert_eq!(details.cover_image, "https://media.rawg.io/stardew.jpg");
        assert_eq!(details.platforms, vec!["PC"]);
    }

    #[tokio::test]
    async fn test_search_game_empty_results_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 0,
                "results": []
            })))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let details = client.search_game("no such game").await.unwrap();
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_search_game_non_success_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = make_client(&server);
        let err = client.search_game("Stardew Valley").await.unwrap_err();
        assert!(matches!(err, AppError::CatalogLookup(_)));
    }
}
