//! Composition root: one client, two connections, nine resource modules.

use serde_json::Value;

use crate::api::{
    AccessTokens, Accounts, Assets, Balances, Config, MockHsm, TransactionFeeds, Transactions,
    UnspentOutputs,
};
use crate::error::ClientError;
use crate::transport::{Connection, RetryPolicy, Transport, DEFAULT_CORE_URL};

/// Root handle for talking to one Chain Core.
///
/// Owns two [`Connection`]s sharing the same token (the ledger endpoint and
/// the mock-HSM signer at `{base_url}/mockhsm`) and hands them to the
/// resource modules. Everything else is delegation: the client performs no
/// dispatch, retry, or decoding of its own.
pub struct Client {
    connection: Connection,
    signer_connection: Connection,
}

impl Client {
    /// Client with the default retry policy. `token` is a Chain Core client
    /// token (`id:secret`); pass an empty string for unauthenticated access.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        Self::with_policy(base_url, token, RetryPolicy::default())
    }

    /// Client with an explicit retry policy, shared by both connections.
    pub fn with_policy(
        base_url: &str,
        token: &str,
        policy: RetryPolicy,
    ) -> Result<Self, ClientError> {
        let trimmed = base_url.trim_end_matches('/');
        let connection = Connection::with_policy(trimmed, token, policy.clone())?;
        let signer_connection =
            Connection::with_policy(&format!("{trimmed}/mockhsm"), token, policy)?;
        Ok(Self {
            connection,
            signer_connection,
        })
    }

    /// Client for a Chain Core on the default local address.
    pub fn localhost(token: &str) -> Result<Self, ClientError> {
        Self::new(DEFAULT_CORE_URL, token)
    }

    /// Ad hoc passthrough to the ledger connection.
    pub async fn request(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.connection.request(path, body).await
    }

    /// The ledger connection.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// The mock-HSM signer connection.
    pub fn signer_connection(&self) -> &Connection {
        &self.signer_connection
    }

    pub fn access_tokens(&self) -> AccessTokens<'_> {
        AccessTokens::new(&self.connection)
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(&self.connection)
    }

    pub fn assets(&self) -> Assets<'_> {
        Assets::new(&self.connection)
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances::new(&self.connection)
    }

    pub fn config(&self) -> Config<'_> {
        Config::new(&self.connection)
    }

    pub fn mock_hsm(&self) -> MockHsm<'_> {
        MockHsm::new(&self.connection, &self.signer_connection)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.connection)
    }

    pub fn transaction_feeds(&self) -> TransactionFeeds<'_> {
        TransactionFeeds::new(&self.connection)
    }

    pub fn unspent_outputs(&self) -> UnspentOutputs<'_> {
        UnspentOutputs::new(&self.connection)
    }
}
