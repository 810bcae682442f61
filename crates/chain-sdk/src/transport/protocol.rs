use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ApiError, ClientError};

use super::types::{BatchOutcome, BatchResponse, Page};

/// Longest response-body excerpt carried into a synthesized error detail.
const ERROR_DETAIL_CAP: usize = 256;

#[derive(serde::Deserialize)]
struct WireError {
    code: String,
    message: String,
    #[serde(default)]
    detail: Option<String>,
}

/// Decode a failure response body into the server's error descriptor.
///
/// Chain Core error bodies are `{"code", "message", "detail"}`. When a
/// proxy or crash returns something else, a descriptor is synthesized from
/// the status line so callers still get a uniform error shape.
pub(super) fn decode_api_error(status: StatusCode, body: &str) -> ApiError {
    match serde_json::from_str::<WireError>(body) {
        Ok(wire) => ApiError {
            code: wire.code,
            message: wire.message,
            detail: wire.detail,
            status: Some(status.as_u16()),
        },
        Err(_) => ApiError {
            code: format!("HTTP{}", status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_owned(),
            detail: (!body.trim().is_empty()).then(|| excerpt(body)),
            status: Some(status.as_u16()),
        },
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_DETAIL_CAP) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_owned(),
    }
}

/// Decode a whole batch response body and enforce positional alignment:
/// the response must be an array of exactly `expected_len` elements.
pub(super) fn decode_batch(expected_len: usize, body: Value) -> Result<BatchResponse, ClientError> {
    let Value::Array(elements) = body else {
        return Err(ClientError::InvalidResponse(
            "batch response is not an array".to_owned(),
        ));
    };
    if elements.len() != expected_len {
        return Err(ClientError::InvalidResponse(format!(
            "batch response has {} elements for {expected_len} submitted items",
            elements.len()
        )));
    }
    Ok(BatchResponse::new(
        elements.into_iter().map(decode_batch_outcome).collect(),
    ))
}

/// An element of a batch response is an error descriptor when it is an
/// object carrying a string `code` and a string `message`; anything else is
/// the success payload for that position.
fn decode_batch_outcome(element: Value) -> BatchOutcome {
    let descriptor_shaped = element.get("code").is_some_and(Value::is_string)
        && element.get("message").is_some_and(Value::is_string);
    if !descriptor_shaped {
        return BatchOutcome::Success(element);
    }
    match serde_json::from_value::<WireError>(element.clone()) {
        Ok(wire) => BatchOutcome::Failure(ApiError {
            code: wire.code,
            message: wire.message,
            detail: wire.detail,
            status: None,
        }),
        Err(_) => BatchOutcome::Success(element),
    }
}

/// Decode a pagination response body into a [`Page`].
pub(super) fn decode_page(body: Value) -> Result<Page, ClientError> {
    serde_json::from_value(body)
        .map_err(|e| ClientError::InvalidResponse(format!("decode page envelope: {e}")))
}
