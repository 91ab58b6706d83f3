//! The one list handler every paginated endpoint goes through

use async_graphql::{InputObject, OutputType};
use serde::de::DeserializeOwned;

use crate::graphql::pagination::{Paginated, RawPage, normalize};

use super::error::TmdbError;
use super::gateway::{QueryParams, TmdbGateway};
use super::language::Language;

/// Arguments accepted by every nested list field
#[derive(InputObject, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    #[graphql(default = 1)]
    pub page: i32,
    pub language: Option<Language>,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self {
            page: 1,
            language: None,
        }
    }
}

impl PageArgs {
    pub fn page(page: i32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Fetch one page of `endpoint` and normalize it
pub async fn fetch_page<T>(
    gateway: &TmdbGateway,
    endpoint: &str,
    args: PageArgs,
) -> Result<Paginated<T>, TmdbError>
where
    T: OutputType + DeserializeOwned,
{
    fetch_page_with(gateway, endpoint, Vec::new(), args).await
}

/// [`fetch_page`] with extra endpoint-specific parameters (e.g. `query`)
pub async fn fetch_page_with<T>(
    gateway: &TmdbGateway,
    endpoint: &str,
    mut params: QueryParams,
    args: PageArgs,
) -> Result<Paginated<T>, TmdbError>
where
    T: OutputType + DeserializeOwned,
{
    params.push(("page", args.page.to_string()));
    let raw: RawPage<T> = gateway.execute_as(endpoint, params, args.language).await?;
    Ok(normalize(args.page, raw))
}

/// Movie listing endpoints
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MovieList {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl MovieList {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::NowPlaying => "movie/now_playing",
            Self::Popular => "movie/popular",
            Self::TopRated => "movie/top_rated",
            Self::Upcoming => "movie/upcoming",
        }
    }
}

/// TV listing endpoints
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TvList {
    OnTheAir,
    Popular,
    TopRated,
    AiringToday,
}

impl TvList {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::OnTheAir => "tv/on_the_air",
            Self::Popular => "tv/popular",
            Self::TopRated => "tv/top_rated",
            Self::AiringToday => "tv/airing_today",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::services::tmdb::models::BaseMovie;
    use crate::services::tmdb::testing::ScriptedFetcher;

    #[tokio::test]
    async fn test_fetch_page_sends_page_and_normalizes() {
        let fetcher = ScriptedFetcher::new().route(
            "movie/popular",
            json!({
                "page": 2,
                "total_pages": 2,
                "total_results": 21,
                "results": [{ "id": 1, "title": "A" }, { "id": 2, "title": "B" }]
            }),
        );

        let page: Paginated<BaseMovie> =
            fetch_page(&fetcher.gateway(), "movie/popular", PageArgs::page(2))
                .await
                .unwrap();

        assert!(!page.has_more);
        assert_eq!(page.total_results, 21);
        let ids: Vec<i32> = page.items.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let call = fetcher.last_call();
        assert_eq!(call.param("page"), Some("2"));
        assert_eq!(call.param("language"), None);
    }

    #[tokio::test]
    async fn test_fetch_page_forwards_language() {
        let fetcher = ScriptedFetcher::new().route(
            "tv/popular",
            json!({ "page": 1, "total_pages": 0, "total_results": 0, "results": [] }),
        );

        let page: Paginated<crate::services::tmdb::models::BaseTvShow> = fetch_page(
            &fetcher.gateway(),
            "tv/popular",
            PageArgs::page(1).with_language(Language::FrFr),
        )
        .await
        .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.has_more);
        assert_eq!(fetcher.last_call().param("language"), Some("fr-fr"));
    }

    #[tokio::test]
    async fn test_fetch_page_rejects_malformed_envelope() {
        let fetcher = ScriptedFetcher::new().route("movie/upcoming", json!({ "results": 3 }));

        let result: Result<Paginated<BaseMovie>, _> =
            fetch_page(&fetcher.gateway(), "movie/upcoming", PageArgs::default()).await;

        assert_matches!(result, Err(TmdbError::Decode(_)));
    }

    #[test]
    fn test_list_endpoints() {
        assert_eq!(MovieList::NowPlaying.endpoint(), "movie/now_playing");
        assert_eq!(MovieList::Upcoming.endpoint(), "movie/upcoming");
        assert_eq!(TvList::OnTheAir.endpoint(), "tv/on_the_air");
        assert_eq!(TvList::AiringToday.endpoint(), "tv/airing_today");
    }
}
