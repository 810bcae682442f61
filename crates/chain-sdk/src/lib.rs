//! Client SDK for the Chain Core ledger API.
//!
//! One shared transport layer ([`Connection`], behind the [`Transport`]
//! trait) carries every request: single calls, batch submissions with
//! per-item outcomes, and cursor-paginated listings. Resource modules
//! ([`api`]) are declarative method-to-path mappings on top of it, and
//! [`Client`] wires the whole thing together with a second connection for
//! the mock-HSM signer.
//!
//! ```no_run
//! use chain_sdk::Client;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), chain_sdk::ClientError> {
//! let client = Client::new("http://localhost:1999", "client:secret")?;
//! let page = client.accounts().list(json!({})).await?;
//! println!("{} accounts on the first page", page.items.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod transport;

pub use client::Client;
pub use error::{ApiError, ClientError};
pub use transport::{
    pages, BatchOutcome, BatchResponse, Connection, Page, RetryPolicy, Transport, DEFAULT_CORE_URL,
};
