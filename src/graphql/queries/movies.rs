use super::prelude::*;
use crate::services::tmdb::MovieList;

#[derive(Default)]
pub struct MovieQueries;

#[Object]
impl MovieQueries {
    /// Get a movie by TMDB id, null when it does not exist
    async fn movie(
        &self,
        ctx: &Context<'_>,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<MovieDetails>> {
        tmdb(ctx)?.movies.get_details(id, language).await.gql()
    }

    /// Curated movie lists
    async fn trending_movies(&self) -> TrendingMovies {
        TrendingMovies
    }
}

pub struct TrendingMovies;

impl TrendingMovies {
    async fn list(
        &self,
        ctx: &Context<'_>,
        list: MovieList,
        args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        tmdb(ctx)?.movies.get_trending(list, args).await.gql()
    }
}

#[Object]
impl TrendingMovies {
    async fn now_playing(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        self.list(ctx, MovieList::NowPlaying, args).await
    }

    async fn popular(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        self.list(ctx, MovieList::Popular, args).await
    }

    async fn top_rated(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        self.list(ctx, MovieList::TopRated, args).await
    }

    async fn upcoming(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        self.list(ctx, MovieList::Upcoming, args).await
    }
}
