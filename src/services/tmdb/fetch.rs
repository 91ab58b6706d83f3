//! HTTP fetch primitive behind the TMDB gateway
//!
//! The gateway only needs `get(endpoint, params) -> JSON`. [`HttpFetcher`]
//! provides it with rate limiting, retries for transient failures and a
//! short-lived response cache. Tests swap in their own [`Fetcher`].

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::config::TmdbConfig;
use crate::services::rate_limiter::{
    AttemptError, RateLimitConfig, RateLimitedClient, RetryConfig, retry_async,
};

use super::gateway::status_code;

/// Raw upstream access: resolve `endpoint` against the base URL, send
/// `params` as the query string, return the decoded JSON body.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value>;
}

/// reqwest-backed fetcher used in production
pub struct HttpFetcher {
    client: Arc<RateLimitedClient>,
    base_url: String,
    retry_config: RetryConfig,
    cache: ResponseCache,
}

impl HttpFetcher {
    pub fn new(config: &TmdbConfig) -> Result<Self> {
        let client = RateLimitedClient::new("tmdb", &RateLimitConfig::from(config))?;

        Ok(Self {
            client: Arc::new(client),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry_config: RetryConfig::default(),
            cache: ResponseCache::new(config.cache_ttl),
        })
    }

    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_config = retry_config;
        self
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.url_for(endpoint);
        let cache_key = ResponseCache::key(&url, params);

        if let Some(body) = self.cache.get(&cache_key) {
            debug!(endpoint = %endpoint, "TMDB response served from cache");
            return Ok(body);
        }

        let client = self.client.clone();
        let (status, body) = retry_async(
            || {
                let url = url.clone();
                let client = client.clone();
                async move {
                    let response = client.send(&url, params).await?;
                    let status = response.status();

                    // TMDB reports failures in-band, so error statuses still carry
                    // a JSON body with a `status_code` worth handing back.
                    match response.json::<Value>().await {
                        Ok(body) => Ok((status, body)),
                        Err(e) if status.is_success() => Err(AttemptError::Permanent(
                            anyhow::Error::new(e).context("TMDB returned a body that is not JSON"),
                        )),
                        Err(_) => Err(AttemptError::Permanent(anyhow!(
                            "TMDB request to '{}' failed with status: {}",
                            endpoint,
                            status
                        ))),
                    }
                }
            },
            &self.retry_config,
            endpoint,
        )
        .await?;

        let sentinel = status_code(&body);
        if sentinel.is_some() {
            debug!(endpoint = %endpoint, status = %status, status_code = ?sentinel, "TMDB returned an in-band status");
            return Ok(body);
        }

        if !status.is_success() {
            anyhow::bail!("TMDB request to '{}' failed with status: {}", endpoint, status);
        }

        self.cache.insert(cache_key, body.clone());
        Ok(body)
    }
}

const MAX_CACHE_ENTRIES: usize = 1024;

/// In-memory TTL cache for successful upstream bodies. Values are never
/// mutated once inserted; a zero TTL disables caching.
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, (Instant, Value)>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cache key independent of parameter order
    pub fn key(url: &str, params: &[(String, String)]) -> String {
        let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        pairs.sort();
        format!("{}?{}", url, pairs.join("&"))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        if self.ttl.is_zero() {
            return None;
        }

        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|(stored_at, _)| stored_at.elapsed() < self.ttl)
            .map(|(_, body)| body.clone())
    }

    pub fn insert(&self, key: String, body: Value) {
        if self.ttl.is_zero() {
            return;
        }

        let mut entries = self.entries.write();
        if entries.len() >= MAX_CACHE_ENTRIES {
            let ttl = self.ttl;
            entries.retain(|_, (stored_at, _)| stored_at.elapsed() < ttl);
            if entries.len() >= MAX_CACHE_ENTRIES {
                entries.clear();
            }
        }
        entries.insert(key, (Instant::now(), body));
    }
}
