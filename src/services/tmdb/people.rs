//! Popular people listing

use crate::graphql::pagination::Paginated;

use super::error::TmdbError;
use super::gateway::TmdbGateway;
use super::list::{PageArgs, fetch_page};
use super::models::BasePerson;

const POPULAR_PEOPLE_ENDPOINT: &str = "person/popular";

#[derive(Clone)]
pub struct PeopleHandler {
    gateway: TmdbGateway,
}

impl PeopleHandler {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    pub async fn get_popular(&self, args: PageArgs) -> Result<Paginated<BasePerson>, TmdbError> {
        fetch_page(&self.gateway, POPULAR_PEOPLE_ENDPOINT, args).await
    }
}
