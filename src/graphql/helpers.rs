// Helper functions shared across GraphQL query and resolver modules.

use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions};
use tracing::error;

use crate::services::tmdb::{TmdbError, TmdbService};

/// The TMDB service registered on the schema
pub(crate) fn tmdb<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a TmdbService> {
    ctx.data::<Arc<TmdbService>>().map(Arc::as_ref)
}

/// Convert a handler error into a GraphQL error carrying a `code` extension.
/// Failures that were not classified into a domain outcome are logged here.
pub(crate) fn graphql_error(err: TmdbError) -> async_graphql::Error {
    if err.is_unclassified() {
        error!(error = %err, code = err.code(), "TMDB operation failed");
    }
    err.extend()
}

pub(crate) trait TmdbResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T> TmdbResultExt<T> for Result<T, TmdbError> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(graphql_error)
    }
}
