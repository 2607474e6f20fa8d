//! Resilient Fetcher Module
//!
//! Cache-aware JSON fetching on top of a `Transport`.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::ResponseCache;
use crate::error::{FetchError, Result};
use crate::transport::{HttpRequest, Transport};

// == Resilient Fetcher ==
/// Fetches JSON through the response cache.
///
/// The cache lock is never held while a request is in flight. Concurrent
/// misses on the same URL each reach the network and the last one to finish
/// wins the cache slot.
#[derive(Debug)]
pub struct ResilientFetcher<T> {
    transport: T,
    cache: Arc<RwLock<ResponseCache>>,
}

impl<T: Transport> ResilientFetcher<T> {
    // == Constructor ==
    pub fn new(transport: T, cache: ResponseCache) -> Self {
        Self::with_shared_cache(transport, Arc::new(RwLock::new(cache)))
    }

    pub fn with_shared_cache(transport: T, cache: Arc<RwLock<ResponseCache>>) -> Self {
        Self { transport, cache }
    }

    /// Shared handle to the cache, e.g. for the background sweep.
    pub fn cache(&self) -> Arc<RwLock<ResponseCache>> {
        Arc::clone(&self.cache)
    }

    // == Fetch JSON ==
    /// Returns the JSON body at `url`, served from cache if no older than `ttl`.
    ///
    /// # Errors
    /// - `Network` when the transport fails
    /// - `HttpStatus` for any non-2xx answer
    /// - `Decode` when the body is not JSON
    ///
    /// Nothing is cached on error.
    pub async fn fetch_json(&self, url: &str, ttl: Duration) -> Result<Value> {
        self.fetch_as(url, ttl).await
    }

    // == Fetch Typed ==
    /// Like `fetch_json`, then decodes into `D`.
    ///
    /// A body that is JSON but does not fit `D` is a `Decode` error and is
    /// not cached.
    pub async fn fetch_as<D: DeserializeOwned>(&self, url: &str, ttl: Duration) -> Result<D> {
        if let Some(hit) = self.cached(url, ttl).await {
            debug!(url, "cache hit");
            return Ok(serde_json::from_value(hit)?);
        }

        debug!(url, "cache miss");
        let value = self.fetch_uncached(url).await?;
        let decoded = serde_json::from_value(value.clone())?;

        self.cache.write().await.set(url, value);
        Ok(decoded)
    }

    // == Mutate ==
    /// Sends a state-changing request and drops the whole cache.
    ///
    /// The cache is cleared as soon as the upstream answers, whatever the
    /// status, since a failed mutation may still have been partly applied.
    /// Transport failures leave the cache untouched.
    pub async fn mutate(&self, request: HttpRequest) -> Result<()> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;

        self.cache.write().await.clear();
        info!(?method, url = %url, status = response.status, "mutation sent, cache cleared");

        if !response.is_success() {
            return Err(FetchError::HttpStatus(response.status));
        }
        Ok(())
    }

    async fn cached(&self, url: &str, ttl: Duration) -> Option<Value> {
        self.cache.write().await.get(url, ttl)
    }

    async fn fetch_uncached(&self, url: &str) -> Result<Value> {
        let response = self.transport.send(HttpRequest::get(url)).await?;

        if !response.is_success() {
            return Err(FetchError::HttpStatus(response.status));
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}
