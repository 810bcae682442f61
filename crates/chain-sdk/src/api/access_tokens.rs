//! Access token management endpoints.

use futures::Stream;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::transport::{pages, Page, Transport};

/// API actions for access tokens.
pub struct AccessTokens<'a> {
    transport: &'a dyn Transport,
}

impl<'a> AccessTokens<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Create an access token. The returned object carries the full
    /// `id:secret` token string; the secret is not retrievable later.
    pub async fn create(&self, params: Value) -> Result<Value, ClientError> {
        self.transport.request("/create-access-token", params).await
    }

    /// Fetch one page of access tokens matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport
            .request_page("/list-access-tokens", query)
            .await
    }

    /// Lazily walk every page of access tokens matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-access-tokens", query)
    }

    /// Revoke the token with the given id.
    pub async fn delete(&self, id: &str) -> Result<Value, ClientError> {
        self.transport
            .request("/delete-access-token", json!({ "id": id }))
            .await
    }
}
