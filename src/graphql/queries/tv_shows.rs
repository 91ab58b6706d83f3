use super::prelude::*;
use crate::services::tmdb::TvList;

#[derive(Default)]
pub struct TvShowQueries;

#[Object]
impl TvShowQueries {
    /// Get a TV show by TMDB id, null when it does not exist
    async fn tv_show(
        &self,
        ctx: &Context<'_>,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<TvShowDetails>> {
        tmdb(ctx)?.tv_shows.get_details(id, language).await.gql()
    }

    /// Get one season of a TV show with its episodes
    async fn tv_show_season(
        &self,
        ctx: &Context<'_>,
        id: i32,
        season: i32,
        language: Option<Language>,
    ) -> Result<Option<TvSeason>> {
        tmdb(ctx)?
            .tv_shows
            .get_season(id, season, language)
            .await
            .gql()
    }

    /// Curated TV show lists
    async fn trending_tv_shows(&self) -> TrendingTvShows {
        TrendingTvShows
    }
}

pub struct TrendingTvShows;

impl TrendingTvShows {
    async fn list(
        &self,
        ctx: &Context<'_>,
        list: TvList,
        args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>> {
        tmdb(ctx)?.tv_shows.get_trending(list, args).await.gql()
    }
}

#[Object(name = "TrendingTVShows")]
impl TrendingTvShows {
    async fn on_the_air(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>> {
        self.list(ctx, TvList::OnTheAir, args).await
    }

    async fn popular(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>> {
        self.list(ctx, TvList::Popular, args).await
    }

    async fn top_rated(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>> {
        self.list(ctx, TvList::TopRated, args).await
    }

    async fn airing_today(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>> {
        self.list(ctx, TvList::AiringToday, args).await
    }
}
