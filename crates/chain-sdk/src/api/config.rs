//! Core configuration endpoints.

use serde_json::{json, Value};

use crate::error::ClientError;
use crate::transport::Transport;

/// API actions for core configuration.
pub struct Config<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Config<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the core's current configuration and status summary.
    pub async fn info(&self) -> Result<Value, ClientError> {
        self.transport.request("/info", json!({})).await
    }

    /// Configure an unconfigured core as a new blockchain or as a replica
    /// of an existing generator.
    pub async fn configure(&self, opts: Value) -> Result<Value, ClientError> {
        self.transport.request("/configure", opts).await
    }

    /// Reset the core. With `everything` set, access tokens and MockHSM
    /// keys are wiped along with the blockchain data.
    pub async fn reset(&self, everything: bool) -> Result<Value, ClientError> {
        self.transport
            .request("/reset", json!({ "everything": everything }))
            .await
    }
}
