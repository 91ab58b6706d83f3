//! Genre id to localized name resolution

use tracing::debug;

use super::error::TmdbError;
use super::gateway::TmdbGateway;
use super::language::{Language, MediaKind};
use super::models::GenreCatalog;

#[derive(Clone)]
pub struct GenreResolver {
    gateway: TmdbGateway,
}

impl GenreResolver {
    pub fn new(gateway: TmdbGateway) -> Self {
        Self { gateway }
    }

    /// Names for `ids`, in the order the ids were given.
    ///
    /// Makes no upstream call when `ids` is empty or `kind` is `None`.
    /// Otherwise fetches the catalog for `(kind, language or default)` once
    /// and silently drops ids the catalog does not know.
    pub async fn resolve_names(
        &self,
        ids: &[i32],
        kind: Option<MediaKind>,
        language: Option<Language>,
    ) -> Result<Vec<String>, TmdbError> {
        let Some(kind) = kind else {
            return Ok(Vec::new());
        };
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let language = language.unwrap_or_default();
        let catalog: GenreCatalog = self
            .gateway
            .execute_as(kind.genre_endpoint(), Vec::new(), Some(language))
            .await?;

        let names: Vec<String> = ids
            .iter()
            .filter_map(|id| {
                catalog
                    .genres
                    .iter()
                    .find(|genre| genre.id == *id)
                    .map(|genre| genre.name.clone())
            })
            .collect();

        debug!(
            kind = ?kind,
            language = language.locale(),
            requested = ids.len(),
            resolved = names.len(),
            "Resolved genre names"
        );

        Ok(names)
    }
}
