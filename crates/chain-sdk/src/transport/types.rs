//! Response envelopes returned by the transport layer.
//!
//! Raw payloads stay as [`serde_json::Value`]; the transport only gives them
//! shape (per-item batch outcomes, page-plus-cursor). Callers that want
//! static types decode the values themselves.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// One slice of a cursor-paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Decoded items of this slice.
    #[serde(default)]
    pub items: Vec<Value>,
    /// Opaque continuation token; empty or absent once the listing is
    /// exhausted.
    #[serde(default)]
    pub cursor: String,
}

impl Page {
    /// Whether this page ends the listing. Exhaustion is signaled by an
    /// empty cursor or an empty item slice, whichever comes first.
    pub fn is_last(&self) -> bool {
        self.cursor.is_empty() || self.items.is_empty()
    }
}

/// Outcome of a single item inside a batch call.
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The item was accepted; holds its decoded response object.
    Success(Value),
    /// The item was rejected; holds the server's error descriptor.
    Failure(ApiError),
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn into_result(self) -> Result<Value, ApiError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(err) => Err(err),
        }
    }
}

/// Per-item outcomes of a batch call, positionally aligned with the
/// submitted items: `outcomes()[i]` answers for input `i`, and the length
/// always equals the submitted length.
#[derive(Debug, Clone)]
pub struct BatchResponse {
    outcomes: Vec<BatchOutcome>,
}

impl BatchResponse {
    pub(crate) fn new(outcomes: Vec<BatchOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn outcomes(&self) -> &[BatchOutcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<BatchOutcome> {
        self.outcomes
    }

    /// Payloads of the accepted items, in submission order.
    pub fn successes(&self) -> impl Iterator<Item = &Value> {
        self.outcomes.iter().filter_map(BatchOutcome::success)
    }

    /// Rejected items with their positions in the submitted batch.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &ApiError)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.failure().map(|err| (index, err)))
    }
}
