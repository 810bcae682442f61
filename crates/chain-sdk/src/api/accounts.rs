//! Account management endpoints.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, BatchResponse, Page, Transport};

/// API actions for accounts.
pub struct Accounts<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Create accounts in one batch call; one outcome per requested account.
    pub async fn create_batch(&self, accounts: Vec<Value>) -> Result<BatchResponse, ClientError> {
        self.transport.request_batch("/create-account", accounts).await
    }

    /// Create a single account, surfacing its outcome directly.
    pub async fn create(&self, account: Value) -> Result<Value, ClientError> {
        super::expect_single(self.create_batch(vec![account]).await?)
    }

    /// Fetch one page of accounts matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport.request_page("/list-accounts", query).await
    }

    /// Lazily walk every page of accounts matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-accounts", query)
    }

    /// Create receivers under existing accounts; one outcome per request.
    pub async fn create_receiver_batch(
        &self,
        receivers: Vec<Value>,
    ) -> Result<BatchResponse, ClientError> {
        self.transport
            .request_batch("/create-account-receiver", receivers)
            .await
    }

    /// Create a single receiver under an existing account.
    pub async fn create_receiver(&self, receiver: Value) -> Result<Value, ClientError> {
        super::expect_single(self.create_receiver_batch(vec![receiver]).await?)
    }
}
