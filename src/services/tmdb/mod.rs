//! TheMovieDB integration
//!
//! Every upstream call flows through [`TmdbGateway`], which wraps a
//! [`Fetcher`]. The domain handlers compose the gateway with pagination
//! normalization and genre resolution; [`TmdbService`] bundles them for the
//! GraphQL layer.

pub mod error;
pub mod fetch;
pub mod gateway;
pub mod genres;
pub mod language;
pub mod list;
pub mod models;
pub mod movies;
pub mod people;
pub mod person;
pub mod search;
pub mod tv_shows;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use anyhow::Result;

use crate::config::TmdbConfig;

pub use error::TmdbError;
pub use fetch::{Fetcher, HttpFetcher};
pub use gateway::TmdbGateway;
pub use genres::GenreResolver;
pub use language::{Language, MediaKind};
pub use list::{MovieList, PageArgs, TvList};
pub use movies::MovieHandler;
pub use people::PeopleHandler;
pub use person::PersonHandler;
pub use search::{SearchHandler, SearchInput, SearchType};
pub use tv_shows::TvShowHandler;

/// All TMDB handlers, sharing one gateway
#[derive(Clone)]
pub struct TmdbService {
    pub movies: MovieHandler,
    pub tv_shows: TvShowHandler,
    pub person: PersonHandler,
    pub people: PeopleHandler,
    pub search: SearchHandler,
    pub genres: GenreResolver,
}

impl TmdbService {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self {
            movies: MovieHandler::new(gateway.clone()),
            tv_shows: TvShowHandler::new(gateway.clone()),
            person: PersonHandler::new(gateway.clone()),
            people: PeopleHandler::new(gateway.clone()),
            search: SearchHandler::new(gateway.clone()),
            genres: GenreResolver::new(gateway),
        }
    }

    /// Service backed by the real HTTP fetcher
    pub fn from_config(config: &TmdbConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        let gateway = TmdbGateway::new(Arc::new(fetcher), config.api_key.clone());
        Ok(Self::new(gateway))
    }
}
