//! Throttling and retry policy for TMDB requests
//!
//! Every upstream call goes through [`RateLimitedClient::send`], which waits
//! for a governor permit and sorts the outcome into success or an
//! [`AttemptError`]. [`retry_async`] repeats only the transient failures.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, anyhow};
use backoff::ExponentialBackoff;
use backoff::backoff::Backoff;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use crate::config::TmdbConfig;

/// Request quota in front of the upstream
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    /// Requests allowed back to back before the rate applies
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // TMDB tolerates roughly 40 requests per 10 seconds
        Self {
            requests_per_second: 4,
            burst_size: 10,
        }
    }
}

impl From<&TmdbConfig> for RateLimitConfig {
    fn from(config: &TmdbConfig) -> Self {
        Self {
            requests_per_second: config.requests_per_second,
            burst_size: config.burst_size,
        }
    }
}

impl RateLimitConfig {
    /// Zero values clamp to one request
    fn quota(&self) -> Quota {
        let rate = NonZeroU32::new(self.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(self.burst_size).unwrap_or(NonZeroU32::MIN);
        Quota::per_second(rate).allow_burst(burst)
    }
}

/// How an upstream attempt failed
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    /// Network failure, 429, 408 or 5xx. Another attempt may succeed.
    #[error("{0:#}")]
    Transient(anyhow::Error),
    /// Repeating the request would fail the same way
    #[error("{0:#}")]
    Permanent(anyhow::Error),
}

/// Retry class of an upstream HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    RateLimited,
    /// 408 and 5xx
    Transient,
    /// Anything else. The body decides what happened.
    Final,
}

impl StatusClass {
    pub fn of(status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimited
        } else if status == StatusCode::REQUEST_TIMEOUT || status.is_server_error() {
            Self::Transient
        } else {
            Self::Final
        }
    }
}

/// reqwest client gated by a governor quota
pub struct RateLimitedClient {
    client: Client,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    name: String,
}

impl RateLimitedClient {
    pub fn new(name: &str, config: &RateLimitConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            limiter: Arc::new(RateLimiter::direct(config.quota())),
            name: name.to_string(),
        })
    }

    /// Wait for a permit, send a GET and classify the outcome. Responses
    /// with a [`StatusClass::Final`] status are handed back whatever their
    /// status, since TMDB reports some failures in the body.
    pub async fn send<Q: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<Response, AttemptError> {
        self.limiter.until_ready().await;
        debug!(client = %self.name, url = %url, "Sending rate-limited GET");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                AttemptError::Transient(anyhow::Error::new(e).context("HTTP request failed"))
            })?;

        let status = response.status();
        match StatusClass::of(status) {
            StatusClass::RateLimited => {
                warn!(client = %self.name, "Upstream rate limit hit");
                Err(AttemptError::Transient(anyhow!("Rate limited ({status})")))
            }
            StatusClass::Transient => Err(AttemptError::Transient(anyhow!(
                "Upstream returned transient status: {status}"
            ))),
            StatusClass::Final => Ok(response),
        }
    }
}

/// Backoff schedule between transient failures
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Attempts in total, the first one included
    pub max_attempts: u32,
    pub initial_interval: Duration,
    pub max_interval: Duration,
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_interval: Duration::from_millis(500),
            max_interval: Duration::from_secs(10),
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    fn backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_interval: self.initial_interval,
            max_interval: self.max_interval,
            multiplier: self.multiplier,
            max_elapsed_time: None,
            ..Default::default()
        }
    }
}

/// Run `operation` until it succeeds, fails permanently, or uses up
/// `config.max_attempts`
pub async fn retry_async<T, Fut, F>(
    operation: F,
    config: &RetryConfig,
    operation_name: &str,
) -> anyhow::Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, AttemptError>>,
{
    let mut backoff = config.backoff();
    let mut attempt = 0;

    loop {
        attempt += 1;
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(AttemptError::Permanent(e)) => return Err(e),
            Err(AttemptError::Transient(e)) => e,
        };

        let delay = if attempt < config.max_attempts {
            backoff.next_backoff()
        } else {
            None
        };

        let Some(delay) = delay else {
            warn!(
                operation = %operation_name,
                attempts = attempt,
                error = %error,
                "Giving up on transient failures"
            );
            return Err(error);
        };

        warn!(
            operation = %operation_name,
            attempt = attempt,
            error = %error,
            retry_in_ms = delay.as_millis() as u64,
            "Transient failure, retrying"
        );
        tokio::time::sleep(delay).await;
    }
}
