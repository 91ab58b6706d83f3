//! TV show handler

use tracing::debug;

use crate::graphql::pagination::Paginated;

use super::error::TmdbError;
use super::gateway::{TmdbGateway, decode, is_not_found};
use super::language::Language;
use super::list::{PageArgs, TvList, fetch_page};
use super::models::{BaseTvShow, ImageCollection, TvSeason, TvShowDetails, image_paths};

/// Sub-resources folded into a single detail request
const DETAIL_APPENDS: &str = "credits,similar,videos,reviews";

const SEASON_APPENDS: &str = "videos";

#[derive(Clone)]
pub struct TvShowHandler {
    gateway: TmdbGateway,
}

impl TvShowHandler {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    /// Full TV show record, `None` when the id does not exist
    pub async fn get_details(
        &self,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<TvShowDetails>, TmdbError> {
        let body = self
            .gateway
            .execute(
                &format!("tv/{id}"),
                vec![("append_to_response", DETAIL_APPENDS.to_string())],
                language,
            )
            .await?;

        if is_not_found(&body) {
            debug!(tv_show_id = id, "TV show not found");
            return Ok(None);
        }

        decode(body).map(Some)
    }

    pub async fn get_trending(
        &self,
        list: TvList,
        args: PageArgs,
    ) -> Result<Paginated<BaseTvShow>, TmdbError> {
        fetch_page(&self.gateway, list.endpoint(), args).await
    }

    /// Backdrop paths, empty when the id does not exist
    pub async fn get_images(&self, id: i32) -> Result<Vec<String>, TmdbError> {
        let body = self
            .gateway
            .execute(&format!("tv/{id}/images"), Vec::new(), None)
            .await?;

        if is_not_found(&body) {
            return Ok(Vec::new());
        }

        let images: ImageCollection = decode(body)?;
        Ok(image_paths(&images.backdrops))
    }

    /// One season with its episodes, `None` when show or season does not exist
    pub async fn get_season(
        &self,
        id: i32,
        season: i32,
        language: Option<Language>,
    ) -> Result<Option<TvSeason>, TmdbError> {
        let body = self
            .gateway
            .execute(
                &format!("tv/{id}/season/{season}"),
                vec![("append_to_response", SEASON_APPENDS.to_string())],
                language,
            )
            .await?;

        if is_not_found(&body) {
            debug!(tv_show_id = id, season, "TV season not found");
            return Ok(None);
        }

        decode(body).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::services::tmdb::testing::ScriptedFetcher;

    fn game_of_thrones() -> serde_json::Value {
        json!({
            "id": 1399,
            "name": "Game of Thrones",
            "type": "Scripted",
            "genres": [{ "id": 10765, "name": "Sci-Fi & Fantasy" }],
            "credits": { "cast": [{ "id": 22970, "name": "Peter Dinklage" }], "crew": [] },
            "similar": { "results": [{ "id": 1402, "name": "The Walking Dead", "genre_ids": [18] }] },
            "reviews": { "results": [{ "id": "r", "author": "viewer", "content": "Epic" }] },
            "videos": { "results": [] }
        })
    }

    #[tokio::test]
    async fn test_details_without_language_send_no_locale() {
        let fetcher = ScriptedFetcher::new().route("tv/1399", game_of_thrones());
        let handler = TvShowHandler::new(fetcher.gateway());

        let show = handler.get_details(1399, None).await.unwrap().unwrap();

        assert_eq!(show.show_type.as_deref(), Some("Scripted"));
        assert_eq!(show.similar.results[0].id, 1402);
        assert_eq!(show.reviews.results[0].author, "viewer");

        let call = fetcher.last_call();
        assert_eq!(call.param("language"), None);
        assert_eq!(
            call.param("append_to_response"),
            Some("credits,similar,videos,reviews")
        );
    }

    #[tokio::test]
    async fn test_details_with_language_send_normalized_locale() {
        let fetcher = ScriptedFetcher::new().route("tv/1399", game_of_thrones());
        let handler = TvShowHandler::new(fetcher.gateway());

        handler
            .get_details(1399, Some(Language::PtBr))
            .await
            .unwrap();

        assert_eq!(fetcher.last_call().param("language"), Some("pt-br"));
    }

    #[tokio::test]
    async fn test_details_not_found_is_none() {
        let fetcher = ScriptedFetcher::new().route("tv/7", json!({ "status_code": 34 }));
        let handler = TvShowHandler::new(fetcher.gateway());

        assert!(handler.get_details(7, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_images_not_found_is_empty() {
        let fetcher = ScriptedFetcher::new().route("tv/7/images", json!({ "status_code": 34 }));
        let handler = TvShowHandler::new(fetcher.gateway());

        assert!(handler.get_images(7).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trending_airing_today() {
        let fetcher = ScriptedFetcher::new().route(
            "tv/airing_today",
            json!({ "page": 1, "total_pages": 1, "total_results": 1, "results": [{ "id": 5 }] }),
        );
        let handler = TvShowHandler::new(fetcher.gateway());

        let page = handler
            .get_trending(TvList::AiringToday, PageArgs::page(1))
            .await
            .unwrap();

        assert!(!page.has_more);
        assert_eq!(page.items[0].id, 5);
    }

    #[tokio::test]
    async fn test_season_appends_videos() {
        let fetcher = ScriptedFetcher::new().route(
            "tv/1399/season/1",
            json!({
                "id": 3624,
                "season_number": 1,
                "episodes": [{ "id": 63056, "name": "Winter Is Coming", "episode_number": 1 }],
                "videos": { "results": [] }
            }),
        );
        let handler = TvShowHandler::new(fetcher.gateway());

        let season = handler
            .get_season(1399, 1, Some(Language::EnGb))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(season.episodes[0].name.as_deref(), Some("Winter Is Coming"));
        let call = fetcher.last_call();
        assert_eq!(call.param("append_to_response"), Some("videos"));
        assert_eq!(call.param("language"), Some("en-gb"));
    }

    #[tokio::test]
    async fn test_season_not_found_is_none() {
        let fetcher =
            ScriptedFetcher::new().route("tv/1399/season/99", json!({ "status_code": 34 }));
        let handler = TvShowHandler::new(fetcher.gateway());

        assert!(handler.get_season(1399, 99, None).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_key_on_list_is_an_error() {
        let fetcher = ScriptedFetcher::new().route(
            "tv/popular",
            json!({ "status_code": 7, "page": 1, "total_pages": 1, "total_results": 0, "results": [] }),
        );
        let handler = TvShowHandler::new(fetcher.gateway());

        assert_matches!(
            handler.get_trending(TvList::Popular, PageArgs::default()).await,
            Err(TmdbError::InvalidApiKey)
        );
    }
}
