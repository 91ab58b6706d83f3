pub mod movies;
pub mod person;
pub mod search;
pub mod tv_shows;

pub use movies::{MovieQueries, TrendingMovies};
pub use person::PersonQueries;
pub use search::SearchQueries;
pub use tv_shows::{TrendingTvShows, TvShowQueries};

pub(crate) mod prelude {
    pub(crate) use async_graphql::{Context, Object, Result};

    pub(crate) use crate::graphql::helpers::*;
    pub(crate) use crate::graphql::pagination::Paginated;
    pub(crate) use crate::services::tmdb::models::*;
    pub(crate) use crate::services::tmdb::{Language, PageArgs};
}
