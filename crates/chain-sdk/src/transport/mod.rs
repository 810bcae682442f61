//! Chain Core transport layer.
//!
//! Defines the [`Transport`] trait, the three request shapes every resource
//! module is built from, and provides the HTTP implementation
//! ([`Connection`]) plus a canned test transport (`mock::MockTransport`).
//!
//! Resource modules hold a `&dyn Transport` and stay declarative: dispatch,
//! authentication, retry policy, batch alignment, and pagination cursoring
//! all live here.

mod auth;
mod connection;
#[cfg(test)]
pub(crate) mod mock;
mod protocol;
mod retry;
mod types;

pub use connection::{Connection, DEFAULT_CORE_URL};
pub use retry::{RetryClass, RetryMode, RetryPolicy};
pub use types::{BatchOutcome, BatchResponse, Page};

use async_trait::async_trait;
use futures::Stream;
use serde_json::Value;

use crate::error::ClientError;

/// The three request shapes of the Chain Core API.
///
/// Implementations own authentication, retries, and response decoding.
/// Calls are independent: any number may be outstanding concurrently, and a
/// caller cancels a pending call by dropping its future; an abandoned call
/// is not retried and a late response is discarded.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one logical call and return the decoded response body.
    async fn request(&self, path: &str, body: Value) -> Result<Value, ClientError>;

    /// Submit `items` as a JSON array and report success or failure per
    /// item, positionally aligned with the input. The call only fails as a
    /// whole when no aligned response could be obtained (network failure,
    /// auth failure, malformed overall request).
    ///
    /// A batch that reached the server may have partially landed, so
    /// implementations must not resubmit it after any byte of a response was
    /// seen; only provably-unreceived attempts are retried.
    async fn request_batch(&self, path: &str, items: Vec<Value>)
        -> Result<BatchResponse, ClientError>;

    /// Issue one call of a cursor-paginated listing. `query` may carry a
    /// `cursor` from a prior [`Page`] to continue where it left off.
    async fn request_page(&self, path: &str, query: Value) -> Result<Page, ClientError>;
}

/// Lazily walk a paginated listing from `query` until exhaustion.
///
/// The first call sends `query` as-is, so seeding it with a saved `cursor`
/// resumes a previous walk; subsequent calls send only the returned cursor.
/// The stream ends after the first exhausted page without issuing another
/// request.
pub fn pages<'a>(
    transport: &'a dyn Transport,
    path: &'a str,
    query: Value,
) -> impl Stream<Item = Result<Page, ClientError>> + 'a {
    futures::stream::try_unfold(Some(query), move |state| async move {
        let Some(query) = state else {
            return Ok(None);
        };
        let page = transport.request_page(path, query).await?;
        let next = (!page.is_last()).then(|| serde_json::json!({ "cursor": page.cursor.clone() }));
        Ok(Some((page, next)))
    })
}

#[cfg(test)]
mod tests {
    use futures::TryStreamExt;
    use serde_json::json;

    use super::mock::MockTransport;
    use super::pages;

    #[tokio::test]
    async fn pages_walks_cursors_to_exhaustion() {
        let transport = MockTransport::new()
            .with_response(
                "/list-transactions",
                json!({ "items": [1, 2, 3], "cursor": "c1" }),
            )
            .with_response(
                "/list-transactions",
                json!({ "items": [4, 5], "cursor": "" }),
            );

        let collected: Vec<_> = pages(&transport, "/list-transactions", json!({}))
            .try_collect()
            .await
            .expect("pagination must succeed");

        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].items.len(), 3);
        assert_eq!(collected[1].items.len(), 2);

        // The exhausted page must not trigger a third request.
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].1, json!({ "cursor": "c1" }));
    }

    #[tokio::test]
    async fn pages_resumes_from_a_saved_cursor() {
        let transport = MockTransport::new()
            .with_response("/list-accounts", json!({ "items": [4, 5], "cursor": "" }));

        let collected: Vec<_> = pages(&transport, "/list-accounts", json!({ "cursor": "c1" }))
            .try_collect()
            .await
            .expect("pagination must succeed");

        assert_eq!(collected.len(), 1);
        let calls = transport.calls();
        assert_eq!(calls[0].1, json!({ "cursor": "c1" }));
    }

    #[tokio::test]
    async fn pages_stops_on_an_empty_page_even_with_a_cursor() {
        let transport = MockTransport::new()
            .with_response("/list-balances", json!({ "items": [], "cursor": "c9" }));

        let collected: Vec<_> = pages(&transport, "/list-balances", json!({}))
            .try_collect()
            .await
            .expect("pagination must succeed");

        assert_eq!(collected.len(), 1);
        assert!(collected[0].items.is_empty());
        assert_eq!(transport.calls().len(), 1);
    }
}
