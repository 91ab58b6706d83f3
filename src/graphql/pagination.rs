//! Page-based pagination types for GraphQL
//!
//! TMDB paginates every list as `{page, total_pages, total_results, results}`.
//! [`normalize`] turns that into the uniform envelope exposed by every list
//! field.

use async_graphql::{OutputType, SimpleObject};
use serde::Deserialize;

use crate::services::tmdb::models::{BaseMovie, BasePerson, BaseTvShow, Review, SearchResultItem};

/// A page of results as TMDB returns it
#[derive(Debug, Clone, Deserialize)]
pub struct RawPage<T> {
    #[serde(default)]
    pub page: Option<i32>,
    pub total_pages: i32,
    pub total_results: i32,
    pub results: Vec<T>,
}

/// A normalized page of results
#[derive(SimpleObject, Debug, Clone, PartialEq)]
#[graphql(concrete(name = "MoviesQueryResult", params(BaseMovie)))]
#[graphql(concrete(name = "TvShowsQueryResult", params(BaseTvShow)))]
#[graphql(concrete(name = "PeopleQueryResult", params(BasePerson)))]
#[graphql(concrete(name = "ReviewsQueryResult", params(Review)))]
#[graphql(concrete(name = "SearchQueryResult", params(SearchResultItem)))]
pub struct Paginated<T: OutputType> {
    /// Items in upstream order
    pub items: Vec<T>,
    pub total_results: i32,
    pub total_pages: i32,
    /// Whether a page after the requested one exists
    pub has_more: bool,
}

impl<T: OutputType> Paginated<T> {
    /// Convert every item, keeping the pagination metadata
    pub fn map<U: OutputType>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total_results: self.total_results,
            total_pages: self.total_pages,
            has_more: self.has_more,
        }
    }
}

/// Rename the upstream envelope and compute `has_more` against the page that
/// was requested (not the page the upstream echoes back).
pub fn normalize<T: OutputType>(requested_page: i32, raw: RawPage<T>) -> Paginated<T> {
    Paginated {
        has_more: requested_page < raw.total_pages,
        items: raw.results,
        total_results: raw.total_results,
        total_pages: raw.total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(total_pages: i32, results: Vec<i32>) -> RawPage<i32> {
        RawPage {
            page: Some(1),
            total_pages,
            total_results: results.len() as i32,
            results,
        }
    }

    #[test]
    fn test_has_more_tracks_requested_page() {
        for requested in 0..4 {
            for total_pages in 0..4 {
                let page = normalize(requested, raw(total_pages, vec![]));
                assert_eq!(
                    page.has_more,
                    requested < total_pages,
                    "page {requested} of {total_pages}"
                );
            }
        }
    }

    #[test]
    fn test_single_page_has_no_more() {
        let page = normalize(1, raw(1, vec![7]));
        assert!(!page.has_more);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 1);
    }

    #[test]
    fn test_items_keep_upstream_order() {
        let page = normalize(1, raw(2, vec![3, 1, 2]));
        assert_eq!(page.items, vec![3, 1, 2]);
        assert!(page.has_more);
    }

    #[test]
    fn test_missing_page_field_is_accepted() {
        let raw: RawPage<i32> = serde_json::from_value(serde_json::json!({
            "total_pages": 2,
            "total_results": 3,
            "results": [1, 2]
        }))
        .unwrap();
        assert_eq!(raw.page, None);
        assert!(normalize(1, raw).has_more);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = normalize(1, raw(3, vec![1, 2])).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_more);
    }

    #[test]
    fn test_malformed_envelope_is_rejected() {
        let result: Result<RawPage<i32>, _> =
            serde_json::from_value(serde_json::json!({ "status_code": 34 }));
        assert!(result.is_err());
    }
}
