use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::{DATA_CACHE_TTL, FPL_API_BASE_URL, REQUEST_TIMEOUT, USER_AGENT};
use crate::core::cache::TtlCache;
use crate::error::{FplError, Result};
use crate::fpl::types::{Bootstrap, Fixture};

/// Endpoint for the season-wide static dataset.
pub const BOOTSTRAP_ENDPOINT: &str = "bootstrap-static/";

/// Endpoint listing every fixture of the season.
pub const FIXTURES_ENDPOINT: &str = "fixtures/";

/// Client for the public FPL API with a TTL cache in front of every GET.
pub struct FplClient {
    http: Client,
    base_url: String,
    cache: TtlCache,
}

impl FplClient {
    /// Client against the production FPL API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(FPL_API_BASE_URL)
    }

    /// Client against an alternate base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_base_url_and_ttl(base_url, DATA_CACHE_TTL)
    }

    /// Client with an explicit cache TTL.
    pub fn with_base_url_and_ttl(base_url: impl Into<String>, ttl: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(FplClient {
            http,
            base_url: base_url.into(),
            cache: TtlCache::new(ttl),
        })
    }

    /// GET an endpoint, serving fresh cache entries without network I/O.
    pub async fn fetch(&self, endpoint: &str) -> Result<Arc<Value>> {
        self.fetch_with_cache(endpoint, true).await
    }

    /// GET an endpoint. With `use_cache` false the read skips the cache,
    /// but a successful response still replaces the stored entry.
    ///
    /// A non-success status maps to [`FplError::RemoteFetch`] and leaves
    /// the cache untouched.
    pub async fn fetch_with_cache(&self, endpoint: &str, use_cache: bool) -> Result<Arc<Value>> {
        if use_cache {
            if let Some(data) = self.cache.get(endpoint) {
                debug!(endpoint, "cache hit");
                return Ok(data);
            }
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "fetching");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FplError::RemoteFetch {
                status: status.to_string(),
                endpoint: endpoint.to_string(),
            });
        }

        let data: Value = response.json().await?;
        Ok(self.cache.put(endpoint, data))
    }

    /// GET an endpoint and deserialize the payload into `T`.
    pub async fn fetch_as<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let raw = self.fetch(endpoint).await?;
        Ok(T::deserialize(&*raw)?)
    }

    /// Typed variant of [`FplClient::fetch_with_cache`].
    pub async fn fetch_as_with_cache<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        use_cache: bool,
    ) -> Result<T> {
        let raw = self.fetch_with_cache(endpoint, use_cache).await?;
        Ok(T::deserialize(&*raw)?)
    }

    /// The season-wide static dataset (events, teams, players).
    pub async fn bootstrap(&self) -> Result<Bootstrap> {
        self.fetch_as(BOOTSTRAP_ENDPOINT).await
    }

    /// Every fixture of the season.
    pub async fn fixtures(&self) -> Result<Vec<Fixture>> {
        self.fetch_as(FIXTURES_ENDPOINT).await
    }
}
