//! External service integrations

pub mod rate_limiter;
pub mod tmdb;

pub use rate_limiter::{AttemptError, RateLimitConfig, RateLimitedClient, RetryConfig};
pub use tmdb::{TmdbError, TmdbGateway, TmdbService};
