//! Person handler: profile plus combined credits

use tracing::debug;

use super::error::TmdbError;
use super::gateway::{TmdbGateway, decode, is_not_found};
use super::language::Language;
use super::models::{CombinedCredits, Person};

const PROFILE_APPENDS: &str = "images";

#[derive(Clone)]
pub struct PersonHandler {
    gateway: TmdbGateway,
}

impl PersonHandler {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    /// Profile with cast credits merged in, `None` when the id does not exist.
    ///
    /// The profile is fetched first; credits are only requested for a person
    /// that exists.
    pub async fn get_details(
        &self,
        id: i32,
        language: Option<Language>,
    ) -> Result<Option<Person>, TmdbError> {
        let body = self
            .gateway
            .execute(
                &format!("person/{id}"),
                vec![("append_to_response", PROFILE_APPENDS.to_string())],
                language,
            )
            .await?;

        if is_not_found(&body) {
            debug!(person_id = id, "Person not found");
            return Ok(None);
        }

        let mut person: Person = decode(body)?;

        let credits_body = self
            .gateway
            .execute(&format!("person/{id}/combined_credits"), Vec::new(), language)
            .await?;

        if is_not_found(&credits_body) {
            return Ok(Some(person));
        }

        let credits: CombinedCredits = decode(credits_body)?;
        person.cast = credits.cast;

        Ok(Some(person))
    }
}
