//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_graphql::{Request, Response};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use cine_tasty::graphql::{CineTastySchema, build_schema};
use cine_tasty::services::tmdb::{Fetcher, TmdbGateway, TmdbService};

pub const API_KEY: &str = "integration-key";

#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Answers upstream requests from a fixed endpoint table and records them
#[derive(Default)]
pub struct RoutedFetcher {
    routes: HashMap<String, Value>,
    calls: Mutex<Vec<Call>>,
}

impl RoutedFetcher {
    pub fn with_routes(routes: impl IntoIterator<Item = (&'static str, Value)>) -> Arc<Self> {
        Arc::new(Self {
            routes: routes
                .into_iter()
                .map(|(endpoint, body)| (endpoint.to_string(), body))
                .collect(),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }
}

#[async_trait]
impl Fetcher for RoutedFetcher {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        self.calls.lock().push(Call {
            endpoint: endpoint.to_string(),
            params: params.to_vec(),
        });

        self.routes
            .get(endpoint)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no route for '{endpoint}'"))
    }
}

pub fn schema(fetcher: &Arc<RoutedFetcher>) -> CineTastySchema {
    let gateway = TmdbGateway::new(fetcher.clone(), API_KEY);
    build_schema(Arc::new(TmdbService::new(gateway)))
}

pub async fn execute(schema: &CineTastySchema, query: &str) -> Response {
    schema.execute(Request::new(query)).await
}

pub fn data(response: Response) -> Value {
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

pub fn error_code(response: &Response) -> Option<String> {
    response.errors.first().and_then(|err| {
        err.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(|code| match code {
                async_graphql::Value::String(code) => Some(code.clone()),
                _ => None,
            })
    })
}

pub fn page(results: Value, total_pages: i32) -> Value {
    let total_results = results.as_array().map(|r| r.len()).unwrap_or_default();
    serde_json::json!({
        "page": 1,
        "total_pages": total_pages,
        "total_results": total_results,
        "results": results
    })
}
