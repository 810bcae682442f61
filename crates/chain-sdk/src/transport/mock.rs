//! Canned transport for exercising resource modules without a network.
//!
//! Responses are queued per path via the builder and handed out in FIFO
//! order; every call is recorded so tests can assert on the exact path and
//! body a module produced.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ClientError;

use super::protocol;
use super::types::{BatchResponse, Page};
use super::Transport;

pub(crate) struct MockTransport {
    responses: Mutex<HashMap<String, Vec<Value>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw response body for `path`.
    pub(crate) fn with_response(self, path: &str, response: Value) -> Self {
        self.responses
            .lock()
            .expect("mock lock must not be poisoned")
            .entry(path.to_owned())
            .or_default()
            .push(response);
        self
    }

    /// Every `(path, body)` this transport has dispatched, in call order.
    pub(crate) fn calls(&self) -> Vec<(String, Value)> {
        self.calls
            .lock()
            .expect("mock lock must not be poisoned")
            .clone()
    }

    fn take(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.calls
            .lock()
            .expect("mock lock must not be poisoned")
            .push((path.to_owned(), body));
        let mut responses = self
            .responses
            .lock()
            .expect("mock lock must not be poisoned");
        let queue = responses
            .get_mut(path)
            .filter(|queue| !queue.is_empty())
            .ok_or_else(|| ClientError::Config(format!("no canned response for `{path}`")))?;
        Ok(queue.remove(0))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.take(path, body)
    }

    async fn request_batch(
        &self,
        path: &str,
        items: Vec<Value>,
    ) -> Result<BatchResponse, ClientError> {
        let submitted = items.len();
        let raw = self.take(path, Value::Array(items))?;
        protocol::decode_batch(submitted, raw)
    }

    async fn request_page(&self, path: &str, query: Value) -> Result<Page, ClientError> {
        let raw = self.take(path, query)?;
        protocol::decode_page(raw)
    }
}
