//! Application configuration management

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address, all interfaces when unset
    pub host: Option<String>,

    /// Server port
    pub port: u16,

    pub tmdb: TmdbConfig,
}

/// Upstream access settings
#[derive(Clone)]
pub struct TmdbConfig {
    pub api_key: String,

    pub base_url: String,

    /// How long successful responses are served from memory (0 = never)
    pub cache_ttl: Duration,

    pub requests_per_second: u32,

    pub burst_size: u32,
}

impl TmdbConfig {
    /// Defaults for everything but the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(60),
            requests_per_second: 4,
            burst_size: 10,
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("cache_ttl", &self.cache_ttl)
            .field("requests_per_second", &self.requests_per_second)
            .field("burst_size", &self.burst_size)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("THE_MOVIE_DB_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("THE_MOVIE_DB_API_KEY is required")?;

        let defaults = TmdbConfig::with_api_key(api_key);

        Ok(Self {
            host: lookup("HOST").filter(|host| !host.is_empty()),

            port: lookup("PORT")
                .unwrap_or_else(|| "4000".to_string())
                .parse()
                .context("Invalid PORT")?,

            tmdb: TmdbConfig {
                base_url: lookup("TMDB_BASE_URL").unwrap_or(defaults.base_url),

                cache_ttl: match lookup("TMDB_CACHE_TTL_SECS") {
                    Some(secs) => Duration::from_secs(
                        secs.parse().context("Invalid TMDB_CACHE_TTL_SECS")?,
                    ),
                    None => defaults.cache_ttl,
                },

                requests_per_second: match lookup("TMDB_REQUESTS_PER_SECOND") {
                    Some(rps) => rps.parse().context("Invalid TMDB_REQUESTS_PER_SECOND")?,
                    None => defaults.requests_per_second,
                },

                burst_size: match lookup("TMDB_BURST_SIZE") {
                    Some(burst) => burst.parse().context("Invalid TMDB_BURST_SIZE")?,
                    None => defaults.burst_size,
                },

                api_key: defaults.api_key,
            },
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or("0.0.0.0"), self.port)
    }
}
