//! PokeAPI client
//!
//! Fetches response bodies through the TTL cache, keyed by request URL, and
//! decodes them into the location models.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage};

/// HTTP client for the PokeAPI with a response cache in front of it.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>, cache: Cache) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    /// Creates a client with a custom HTTP client
    pub fn with_client(http: Client, base_url: impl Into<String>, cache: Cache) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of the location-area listing
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the body is requested over HTTP. Success responses are
    /// cached under `url` as-is; any status above 299 is returned as
    /// [`PokedexError::Status`] and nothing is cached.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Serving response from cache");
            return Ok(body);
        }

        debug!(url, "Cache miss, fetching from API");
        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        if status > 299 {
            return Err(PokedexError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches a page of location areas; `None` fetches the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.location_areas_url()).await,
        }
    }

    /// Fetches a single location area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationAreaDetail> {
        self.fetch_json(&self.location_area_url(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_urls_strip_trailing_slash() {
        let client = PokeApiClient::new("http://localhost/api/v2/", Cache::new(Duration::from_secs(5)));

        assert_eq!(
            client.location_areas_url(),
            "http://localhost/api/v2/location-area/"
        );
        assert_eq!(
            client.location_area_url("canalave-city-area"),
            "http://localhost/api/v2/location-area/canalave-city-area"
        );
    }

    #[tokio::test]
    async fn test_fetch_serves_cached_body_without_network() {
        // Nothing listens here; a cache hit must not touch the network
        let client = PokeApiClient::new("http://127.0.0.1:9", Cache::new(Duration::from_secs(60)));
        let url = client.location_areas_url();
        client
            .cache()
            .add(url.clone(), br#"{"count":0,"next":null,"previous":null,"results":[]}"#.to_vec())
            .await;

        let page = client.location_areas(None).await.unwrap();
        assert_eq!(page.count, 0);
        assert!(page.results.is_empty());
    }

    #[tokio::test]
    async fn test_cached_body_that_is_not_json_is_parse_error() {
        let client = PokeApiClient::new("http://127.0.0.1:9", Cache::new(Duration::from_secs(60)));
        client
            .cache()
            .add(client.location_area_url("broken"), b"<html>".to_vec())
            .await;

        let result = client.location_area("broken").await;
        assert!(matches!(result, Err(PokedexError::Parse(_))));
    }
}
