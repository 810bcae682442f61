//! Asset issuance and listing endpoints.

use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{pages, BatchResponse, Page, Transport};

/// API actions for assets.
pub struct Assets<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Assets<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Define assets in one batch call; one outcome per requested asset.
    pub async fn create_batch(&self, assets: Vec<Value>) -> Result<BatchResponse, ClientError> {
        self.transport.request_batch("/create-asset", assets).await
    }

    /// Define a single asset, surfacing its outcome directly.
    pub async fn create(&self, asset: Value) -> Result<Value, ClientError> {
        super::expect_single(self.create_batch(vec![asset]).await?)
    }

    /// Fetch one page of assets matching `query`.
    pub async fn list(&self, query: Value) -> Result<Page, ClientError> {
        self.transport.request_page("/list-assets", query).await
    }

    /// Lazily walk every page of assets matching `query`.
    pub fn list_all(&self, query: Value) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
        pages(self.transport, "/list-assets", query)
    }
}
