use std::time::Duration;

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::ClientError;

use super::auth::{parse_base_url, resolve_credentials};
use super::protocol;
use super::retry::{classify, RetryMode, RetryPolicy};
use super::types::{BatchResponse, Page};
use super::Transport;

/// Default address of a locally running Chain Core.
pub const DEFAULT_CORE_URL: &str = "http://localhost:1999";

/// HTTP implementation of [`Transport`] for one Chain Core endpoint.
///
/// Configuration (base URL, token, retry policy) is fixed at construction;
/// a connection holds no per-request state and any number of calls may be
/// outstanding on it concurrently. The composition root builds one
/// connection per logical endpoint (ledger API, mock-HSM signer) and shares
/// it with every resource module for the life of the client.
#[derive(Debug)]
pub struct Connection {
    client: reqwest::Client,
    base_url: String,
    auth: Option<(String, String)>,
    policy: RetryPolicy,
}

impl Connection {
    /// Connection with the default retry policy. `token` is a Chain Core
    /// client token (`id:secret`); pass an empty string for unauthenticated
    /// access.
    pub fn new(base_url: &str, token: &str) -> Result<Self, ClientError> {
        Self::with_policy(base_url, token, RetryPolicy::default())
    }

    /// Connection with an explicit retry policy.
    pub fn with_policy(
        base_url: &str,
        token: &str,
        policy: RetryPolicy,
    ) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;
        let auth = resolve_credentials(token);

        // Deadlines are per attempt; a retried call gets a fresh one.
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| ClientError::Config(format!("build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            auth,
            policy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run one logical call through the retry loop. Exhausting retries
    /// surfaces the last observed error unchanged.
    async fn dispatch(
        &self,
        path: &str,
        body: &Value,
        mode: RetryMode,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let mut attempt = 1u32;
        loop {
            let err = match self.send_once(&url, path, body, attempt).await {
                Ok(decoded) => return Ok(decoded),
                Err(err) => err,
            };
            match self.policy.next_delay(attempt, classify(&err), mode) {
                Some(delay) => {
                    warn!(
                        api.path = path,
                        api.attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                None => return Err(err),
            }
        }
    }

    /// One HTTP exchange: serialize, authenticate, send, classify, decode.
    async fn send_once(
        &self,
        url: &str,
        path: &str,
        body: &Value,
        attempt: u32,
    ) -> Result<Value, ClientError> {
        debug!(api.path = path, api.attempt = attempt, "api request");

        let mut builder = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(body);
        if let Some((ref user, ref pass)) = self.auth {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().await.map_err(classify_send_error)?;
        let status = response.status();

        // A failure here means the exchange broke after the server started
        // answering; it is never treated as provably unreceived.
        let text = response.text().await.map_err(ClientError::Network)?;
        debug!(api.path = path, %status, body_len = text.len(), "api response");
        trace!(api.path = path, body = %text, "api response body");

        if !status.is_success() {
            return Err(ClientError::Api(protocol::decode_api_error(status, &text)));
        }

        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("decode response body: {e}")))
    }
}

/// Split send-phase failures: a pure deadline miss is a timeout, everything
/// else that produced no response is a network failure. Connect timeouts
/// stay `Network` so the retry classifier can see `is_connect` on the
/// source.
fn classify_send_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() && !err.is_connect() {
        ClientError::Timeout(err)
    } else {
        ClientError::Network(err)
    }
}

#[async_trait]
impl Transport for Connection {
    async fn request(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        self.dispatch(path, &body, RetryMode::Idempotent).await
    }

    async fn request_batch(
        &self,
        path: &str,
        items: Vec<Value>,
    ) -> Result<BatchResponse, ClientError> {
        let submitted = items.len();
        let body = Value::Array(items);
        // A batch that reached the server may have partially landed;
        // resubmitting it could duplicate ledger effects. Only attempts the
        // server provably never saw are retried.
        let decoded = self
            .dispatch(path, &body, RetryMode::NotReceivedOnly)
            .await?;
        protocol::decode_batch(submitted, decoded)
    }

    async fn request_page(&self, path: &str, query: Value) -> Result<Page, ClientError> {
        let decoded = self.dispatch(path, &query, RetryMode::Idempotent).await?;
        protocol::decode_page(decoded)
    }
}
