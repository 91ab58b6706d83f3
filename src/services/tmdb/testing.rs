//! Scripted fetcher for handler tests

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use super::fetch::Fetcher;
use super::gateway::TmdbGateway;

pub const TEST_API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Answers by endpoint and records every call. Unrouted endpoints fail like
/// a network error would.
#[derive(Default)]
pub struct ScriptedFetcher {
    routes: HashMap<String, Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(self: Arc<Self>, endpoint: &str, body: Value) -> Arc<Self> {
        let mut this = Arc::try_unwrap(self).unwrap_or_else(|_| panic!("fetcher already shared"));
        this.routes.insert(endpoint.to_string(), body);
        Arc::new(this)
    }

    pub fn gateway(self: &Arc<Self>) -> TmdbGateway {
        TmdbGateway::new(self.clone(), TEST_API_KEY)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.lock().last().cloned().expect("no calls recorded")
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        self.calls.lock().push(RecordedCall {
            endpoint: endpoint.to_string(),
            params: params.to_vec(),
        });

        self.routes
            .get(endpoint)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("connection refused for '{endpoint}'"))
    }
}
