//! Multi-kind search

use async_graphql::{Enum, InputObject};

use crate::graphql::pagination::Paginated;

use super::error::TmdbError;
use super::gateway::TmdbGateway;
use super::language::Language;
use super::list::{PageArgs, fetch_page_with};
use super::models::{BaseMovie, BasePerson, BaseTvShow, SearchResultItem};

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchType {
    Person,
    Movie,
    Tv,
}

impl SearchType {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Person => "search/person",
            Self::Movie => "search/movie",
            Self::Tv => "search/tv",
        }
    }
}

#[derive(InputObject, Debug, Clone)]
pub struct SearchInput {
    pub query: String,
    #[graphql(default = 1)]
    pub page: i32,
    #[graphql(name = "type")]
    pub search_type: SearchType,
    pub language: Option<Language>,
}

#[derive(Clone)]
pub struct SearchHandler {
    gateway: TmdbGateway,
}

impl SearchHandler {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    /// Search one kind of entity. A blank query fails before any upstream call.
    pub async fn search(
        &self,
        input: SearchInput,
    ) -> Result<Paginated<SearchResultItem>, TmdbError> {
        let query = input.query.trim();
        if query.is_empty() {
            return Err(TmdbError::EmptySearchQuery);
        }

        let params = vec![("query", query.to_string())];
        let args = PageArgs {
            page: input.page,
            language: input.language,
        };
        let endpoint = input.search_type.endpoint();

        let page = match input.search_type {
            SearchType::Person => fetch_page_with::<BasePerson>(&self.gateway, endpoint, params, args)
                .await?
                .map(SearchResultItem::Person),
            SearchType::Movie => fetch_page_with::<BaseMovie>(&self.gateway, endpoint, params, args)
                .await?
                .map(SearchResultItem::Movie),
            SearchType::Tv => fetch_page_with::<BaseTvShow>(&self.gateway, endpoint, params, args)
                .await?
                .map(SearchResultItem::Tv),
        };

        Ok(page)
    }
}
