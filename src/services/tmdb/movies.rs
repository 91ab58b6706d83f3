//! Movie handler

use tracing::debug;

use crate::graphql::pagination::Paginated;

use super::error::TmdbError;
use super::gateway::{TmdbGateway, decode, is_not_found};
use super::language::Language;
use super::list::{MovieList, PageArgs, fetch_page};
use super::models::{BaseMovie, ImageCollection, MovieDetails, Review, image_paths};

/// Sub-resources folded into a single detail request
const DETAIL_APPENDS: &str = "videos,credits";

#[derive(Clone)]
pub struct MovieHandler {
    gateway: TmdbGateway,
}

impl MovieHandler {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    /// Full movie record, `None` when the id does not exist
    pub async fn get_details(
        &self,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<MovieDetails>, TmdbError> {
        let body = self
            .gateway
            .execute(
                &format!("movie/{id}"),
                vec![("append_to_response", DETAIL_APPENDS.to_string())],
                language,
            )
            .await?;

        if is_not_found(&body) {
            debug!(movie_id = id, "Movie not found");
            return Ok(None);
        }

        decode(body).map(Some)
    }

    pub async fn get_trending(
        &self,
        list: MovieList,
        args: PageArgs,
    ) -> Result<Paginated<BaseMovie>, TmdbError> {
        fetch_page(&self.gateway, list.endpoint(), args).await
    }

    /// Backdrop paths, empty when the id does not exist
    pub async fn get_images(&self, id: i32) -> Result<Vec<String>, TmdbError> {
        let body = self
            .gateway
            .execute(&format!("movie/{id}/images"), Vec::new(), None)
            .await?;

        if is_not_found(&body) {
            return Ok(Vec::new());
        }

        let images: ImageCollection = decode(body)?;
        Ok(image_paths(&images.backdrops))
    }

    pub async fn get_similar(
        &self,
        id: i32,
        args: PageArgs,
    ) -> Result<Paginated<BaseMovie>, TmdbError> {
        fetch_page(&self.gateway, &format!("movie/{id}/similar"), args).await
    }

    pub async fn get_reviews(
        &self,
        id: i32,
        args: PageArgs,
    ) -> Result<Paginated<Review>, TmdbError> {
        fetch_page(&self.gateway, &format!("movie/{id}/reviews"), args).await
    }
}
