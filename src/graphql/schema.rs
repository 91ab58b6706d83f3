//! GraphQL schema definition
//!
//! Read-only: the API is a query surface over TMDB, so there are no mutations
//! or subscriptions.

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::services::TmdbService;

use super::queries::{MovieQueries, PersonQueries, SearchQueries, TvShowQueries};

/// The GraphQL schema type
pub type CineTastySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(MovieQueries, TvShowQueries, PersonQueries, SearchQueries);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(tmdb: Arc<TmdbService>) -> CineTastySchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(tmdb)
        .extension(Tracing)
        .finish()
}
