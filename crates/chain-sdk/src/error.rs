use serde::Deserialize;

/// Error descriptor supplied by Chain Core.
///
/// Appears in two places: as the decoded body of a failed HTTP response
/// (wrapped in [`ClientError::Api`]) and as the per-item failure payload
/// inside an otherwise successful batch call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Machine-readable error code, e.g. `CH003`.
    pub code: String,
    /// Human-readable summary.
    pub message: String,
    /// Optional additional context for the failure.
    #[serde(default)]
    pub detail: Option<String>,
    /// HTTP status of the enclosing response. `None` for per-item batch
    /// errors, which ride inside a 2xx response.
    #[serde(skip)]
    pub status: Option<u16>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused,
    /// reset, DNS failure, or the transport aborted mid-exchange).
    #[error("network failure talking to Chain Core: {0}")]
    Network(#[source] reqwest::Error),

    /// An attempt exceeded its deadline before a response arrived. Deadlines
    /// are per attempt; a retried call gets a fresh one.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Chain Core answered with a failure status; the decoded error body is
    /// carried unchanged.
    #[error("Chain Core rejected the request: {0}")]
    Api(#[from] ApiError),

    /// A response arrived but did not match the documented envelope.
    #[error("invalid response from Chain Core: {0}")]
    InvalidResponse(String),

    /// Construction-time configuration problem (bad base URL, unbuildable
    /// HTTP client).
    #[error("client configuration error: {0}")]
    Config(String),
}
