use super::prelude::*;

#[derive(Default)]
pub struct PersonQueries;

#[Object]
impl PersonQueries {
    /// Get a person with their cast credits, null when they do not exist
    async fn person(
        &self,
        ctx: &Context<'_>,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<Person>> {
        tmdb(ctx)?.person.get_details(id, language).await.gql()
    }

    /// Popular people
    async fn people(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = 1)] page: i32,
        language: Option<Language>,
    ) -> Result<Paginated<BasePerson>> {
        tmdb(ctx)?
            .people
            .get_popular(PageArgs { page, language })
            .await
            .gql()
    }
}
