//! Balance queries. Balances are always derived server-side from unspent
//! outputs; there is nothing to create or update here.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, Page, Transport};

/// API actions for balances.
pub struct Balances<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Balances<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch one page of balances matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport.request_page("/list-balances", query).await
    }

    /// Lazily walk every page of balances matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-balances", query)
    }
}
