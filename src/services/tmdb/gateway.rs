//! Request gateway: the single chokepoint for every upstream call
//!
//! Injects the API key and the optional locale, delegates to the
//! [`Fetcher`], and refuses to hand back any body that carries the
//! invalid-credentials sentinel. The not-found sentinel is left for each
//! handler to interpret.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use super::error::TmdbError;
use super::fetch::Fetcher;
use super::language::Language;

/// In-band status code for an invalid API key
pub const INVALID_API_KEY_CODE: i64 = 7;

/// In-band status code for a resource that does not exist
pub const ITEM_NOT_FOUND_CODE: i64 = 34;

/// Endpoint-specific query parameters, before credentials are added
pub type QueryParams = Vec<(&'static str, String)>;

#[derive(Clone)]
pub struct TmdbGateway {
    fetcher: Arc<dyn Fetcher>,
    api_key: Arc<str>,
}

impl TmdbGateway {
    pub fn new(fetcher: Arc<dyn Fetcher>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_key: Arc::from(api_key.into()),
        }
    }

    /// Issue a GET and return the raw body.
    ///
    /// `language: None` sends no `language` parameter at all, which is not the
    /// same as sending the default locale.
    pub async fn execute(
        &self,
        endpoint: &str,
        params: QueryParams,
        language: Option<Language>,
    ) -> Result<Value, TmdbError> {
        let mut query: Vec<(String, String)> = params
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        query.push(("api_key".to_string(), self.api_key.to_string()));
        if let Some(language) = language {
            query.push(("language".to_string(), language.locale().to_string()));
        }

        debug!(endpoint = %endpoint, language = ?language.map(Language::locale), "Executing TMDB request");

        let body = self.fetcher.get(endpoint, &query).await?;

        if status_code(&body) == Some(INVALID_API_KEY_CODE) {
            error!(endpoint = %endpoint, "TMDB rejected the configured API key");
            return Err(TmdbError::InvalidApiKey);
        }

        Ok(body)
    }

    /// [`execute`](Self::execute) followed by decoding into `T`
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
        language: Option<Language>,
    ) -> Result<T, TmdbError> {
        let body = self.execute(endpoint, params, language).await?;
        decode(body)
    }
}

/// The in-band `status_code` of a response body, if any
pub fn status_code(body: &Value) -> Option<i64> {
    body.get("status_code").and_then(Value::as_i64)
}

pub fn is_not_found(body: &Value) -> bool {
    status_code(body) == Some(ITEM_NOT_FOUND_CODE)
}

pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, TmdbError> {
    Ok(serde_json::from_value(body)?)
}
