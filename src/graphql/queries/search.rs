use super::prelude::*;
use crate::services::tmdb::SearchInput;

#[derive(Default)]
pub struct SearchQueries;

#[Object]
impl SearchQueries {
    /// Search people, movies or TV shows by name
    async fn search(
        &self,
        ctx: &Context<'_>,
        input: SearchInput,
    ) -> Result<Paginated<SearchResultItem>> {
        tmdb(ctx)?.search.search(input).await.gql()
    }
}
