//! Transaction feed management.
//!
//! A feed is a named, durable cursor over matching transactions. Consuming
//! one is plain pagination: walk pages with [`TransactionFeeds::list_all`]
//! or re-seed a query with a cursor saved from a previous run.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, Page, Transport};

/// API actions for transaction feeds.
pub struct TransactionFeeds<'a> {
    transport: &'a dyn Transport,
}

impl<'a> TransactionFeeds<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Create a feed from a filter.
    pub async fn create(&self, params: Value) -> Result<Value, ClientError> {
        self.transport
            .request("/create-transaction-feed", params)
            .await
    }

    /// Fetch a feed by id or alias.
    pub async fn get(&self, params: Value) -> Result<Value, ClientError> {
        self.transport.request("/get-transaction-feed", params).await
    }

    /// Persist a feed's consumption position.
    pub async fn update(&self, params: Value) -> Result<Value, ClientError> {
        self.transport
            .request("/update-transaction-feed", params)
            .await
    }

    /// Delete a feed by id or alias.
    pub async fn delete(&self, params: Value) -> Result<Value, ClientError> {
        self.transport
            .request("/delete-transaction-feed", params)
            .await
    }

    /// Fetch one page of feeds matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport
            .request_page("/list-transaction-feeds", query)
            .await
    }

    /// Lazily walk every page of feeds matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-transaction-feeds", query)
    }
}
