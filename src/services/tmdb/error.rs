//! Typed outcomes for TMDB operations

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Literal message returned when a search is attempted without a query
pub const EMPTY_SEARCH_QUERY_MESSAGE: &str = "Search query cannot be empty.";

#[derive(Debug, Error)]
pub enum TmdbError {
    /// The upstream service rejected the configured API key (sentinel code 7)
    #[error("Invalid TMDB API key: a valid key must be configured.")]
    InvalidApiKey,

    /// Rejected before any upstream call was issued
    #[error("{}", EMPTY_SEARCH_QUERY_MESSAGE)]
    EmptySearchQuery,

    /// Network or transport failure surfaced by the fetcher
    #[error("TMDB request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),

    /// The upstream body did not have the expected shape
    #[error("Unexpected TMDB response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TmdbError {
    /// Machine-readable code exposed in the GraphQL error extensions
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidApiKey => "INVALID_API_KEY",
            Self::EmptySearchQuery => "BAD_USER_INPUT",
            Self::Upstream(_) | Self::Decode(_) => "UPSTREAM_ERROR",
        }
    }

    /// Failures that were not classified into a domain outcome
    pub fn is_unclassified(&self) -> bool {
        matches!(self, Self::Upstream(_) | Self::Decode(_))
    }
}

impl ErrorExtensions for TmdbError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}
