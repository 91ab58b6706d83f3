//! Computed fields on TMDB models
//!
//! Each of these runs only when the client selects the field, so genre
//! lookups and sub-resource requests are never issued for unused data.

use async_graphql::{ComplexObject, Context, Result};

use crate::graphql::helpers::{TmdbResultExt, tmdb};
use crate::graphql::pagination::Paginated;
use crate::services::tmdb::models::{
    BaseMovie, BaseTvShow, CastItem, CrewItem, MediaVideo, MovieDetails, Person, Review,
    TvSeason, TvShowDetails, image_paths, youtube_videos,
};
use crate::services::tmdb::{Language, MediaKind, PageArgs};

#[ComplexObject]
impl BaseMovie {
    /// Genre names, resolved in `language` (default locale when omitted)
    async fn genre_ids(
        &self,
        ctx: &Context<'_>,
        language: Option<Language>,
    ) -> Result<Vec<String>> {
        tmdb(ctx)?
            .genres
            .resolve_names(&self.genre_ids, Some(MediaKind::Movie), language)
            .await
            .gql()
    }
}

#[ComplexObject]
impl BaseTvShow {
    /// Genre names, resolved in `language` (default locale when omitted)
    async fn genre_ids(
        &self,
        ctx: &Context<'_>,
        language: Option<Language>,
    ) -> Result<Vec<String>> {
        tmdb(ctx)?
            .genres
            .resolve_names(&self.genre_ids, Some(MediaKind::Tv), language)
            .await
            .gql()
    }
}

#[ComplexObject]
impl MovieDetails {
    async fn genres(&self, ctx: &Context<'_>, language: Option<Language>) -> Result<Vec<String>> {
        let ids: Vec<i32> = self.genres.iter().map(|genre| genre.id).collect();
        tmdb(ctx)?
            .genres
            .resolve_names(&ids, Some(MediaKind::Movie), language)
            .await
            .gql()
    }

    async fn spoken_languages(&self) -> Vec<String> {
        self.spoken_languages.iter().map(|l| l.name.clone()).collect()
    }

    async fn production_countries(&self) -> Vec<String> {
        self.production_countries
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    async fn cast(&self) -> Vec<CastItem> {
        self.credits.cast.clone()
    }

    async fn crew(&self) -> Vec<CrewItem> {
        self.credits.crew.clone()
    }

    /// YouTube videos only
    async fn videos(&self) -> Vec<MediaVideo> {
        youtube_videos(&self.videos.results)
    }

    /// Backdrop image paths
    async fn images(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        tmdb(ctx)?.movies.get_images(self.id).await.gql()
    }

    async fn similar(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<BaseMovie>> {
        tmdb(ctx)?.movies.get_similar(self.id, args).await.gql()
    }

    async fn reviews(
        &self,
        ctx: &Context<'_>,
        #[graphql(default)] args: PageArgs,
    ) -> Result<Paginated<Review>> {
        tmdb(ctx)?.movies.get_reviews(self.id, args).await.gql()
    }
}

#[ComplexObject]
impl TvShowDetails {
    async fn genres(&self, ctx: &Context<'_>, language: Option<Language>) -> Result<Vec<String>> {
        let ids: Vec<i32> = self.genres.iter().map(|genre| genre.id).collect();
        tmdb(ctx)?
            .genres
            .resolve_names(&ids, Some(MediaKind::Tv), language)
            .await
            .gql()
    }

    async fn cast(&self) -> Vec<CastItem> {
        self.credits.cast.clone()
    }

    async fn crew(&self) -> Vec<CrewItem> {
        self.credits.crew.clone()
    }

    /// YouTube videos only
    async fn videos(&self) -> Vec<MediaVideo> {
        youtube_videos(&self.videos.results)
    }

    /// Backdrop image paths
    async fn images(&self, ctx: &Context<'_>) -> Result<Vec<String>> {
        tmdb(ctx)?.tv_shows.get_images(self.id).await.gql()
    }

    async fn similar(&self) -> Vec<BaseTvShow> {
        self.similar.results.clone()
    }

    async fn reviews(&self) -> Vec<Review> {
        self.reviews.results.clone()
    }
}

#[ComplexObject]
impl TvSeason {
    /// YouTube videos only
    async fn videos(&self) -> Vec<MediaVideo> {
        youtube_videos(&self.videos.results)
    }
}

#[ComplexObject]
impl Person {
    /// Profile image paths
    async fn images(&self) -> Vec<String> {
        image_paths(&self.images.profiles)
    }
}
