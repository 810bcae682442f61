//! Transaction building, submission, and history endpoints.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, BatchResponse, Page, Transport};

/// API actions for transactions.
pub struct Transactions<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Build unsigned transaction templates from action lists; one outcome
    /// per template.
    pub async fn build_batch(&self, builders: Vec<Value>) -> Result<BatchResponse, ClientError> {
        self.transport
            .request_batch("/build-transaction", builders)
            .await
    }

    /// Build a single unsigned transaction template.
    pub async fn build(&self, builder: Value) -> Result<Value, ClientError> {
        super::expect_single(self.build_batch(vec![builder]).await?)
    }

    /// Submit signed transaction templates; one outcome per template.
    ///
    /// Submission mutates the ledger. The transport never re-issues a
    /// submission the server may have seen (only attempts that provably
    /// failed before reaching the server are retried), so a failed call
    /// reports the truth of that one submission attempt.
    pub async fn submit_batch(&self, signed: Vec<Value>) -> Result<BatchResponse, ClientError> {
        self.transport
            .request_batch("/submit-transaction", signed)
            .await
    }

    /// Submit a single signed transaction template.
    pub async fn submit(&self, signed: Value) -> Result<Value, ClientError> {
        super::expect_single(self.submit_batch(vec![signed]).await?)
    }

    /// Fetch one page of transactions matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport.request_page("/list-transactions", query).await
    }

    /// Lazily walk every page of transactions matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-transactions", query)
    }
}
