//! Mock HSM key management and signing.
//!
//! Key management rides the ledger connection under `/mockhsm/*`; signing
//! goes to the dedicated signer connection, which is rooted at
//! `{base_url}/mockhsm` and speaks the same transport protocol.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, BatchResponse, Page, Transport};

/// API actions for the mock HSM.
pub struct MockHsm<'a> {
    transport: &'a dyn Transport,
    signer: &'a dyn Transport,
}

impl<'a> MockHsm<'a> {
    pub(crate) fn new(transport: &'a dyn Transport, signer: &'a dyn Transport) -> Self {
        Self { transport, signer }
    }

    /// Generate a new key pair in the mock HSM.
    pub async fn create_key(&self, params: Value) -> Result<Value, ClientError> {
        self.transport.request("/mockhsm/create-key", params).await
    }

    /// Fetch one page of mock HSM keys matching `query`.
    pub async fn list_keys(&self, query: Value) -> Result<Page, ClientError> {
        self.transport.request_page("/mockhsm/list-keys", query).await
    }

    /// Lazily walk every page of mock HSM keys matching `query`.
    pub fn list_keys_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/mockhsm/list-keys", query)
    }

    /// Sign transaction templates; one outcome per template.
    pub async fn sign_batch(&self, templates: Vec<Value>) -> Result<BatchResponse, ClientError> {
        self.signer.request_batch("/sign-transaction", templates).await
    }

    /// Sign a single transaction template.
    pub async fn sign(&self, template: Value) -> Result<Value, ClientError> {
        super::expect_single(self.sign_batch(vec![template]).await?)
    }
}
