//! Unspent output queries.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, Page, Transport};

/// API actions for unspent outputs.
pub struct UnspentOutputs<'a> {
    transport: &'a dyn Transport,
}

impl<'a> UnspentOutputs<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch one page of unspent outputs matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport
            .request_page("/list-unspent-outputs", query)
            .await
    }

    /// Lazily walk every page of unspent outputs matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-unspent-outputs", query)
    }
}
