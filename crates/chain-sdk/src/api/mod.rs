//! Resource-scoped API modules.
//!
//! Each module is a declarative mapping from named operations to fixed
//! Chain Core paths with caller-supplied JSON parameters. Dispatch, auth,
//! retries, batch alignment, and pagination cursoring all live in
//! [`crate::transport`]; whole-call errors propagate through these modules
//! unchanged.

mod access_tokens;
mod accounts;
mod assets;
mod balances;
mod config;
mod mock_hsm;
mod transaction_feeds;
mod transactions;
mod unspent_outputs;

pub use access_tokens::AccessTokens;
pub use accounts::Accounts;
pub use assets::Assets;
pub use balances::Balances;
pub use config::Config;
pub use mock_hsm::MockHsm;
pub use transaction_feeds::TransactionFeeds;
pub use transactions::Transactions;
pub use unspent_outputs::UnspentOutputs;

use serde_json::Value;

use crate::error::ClientError;
use crate::transport::{BatchOutcome, BatchResponse};

/// Unwrap a single-item batch call into its one outcome, surfacing the
/// server's per-item descriptor as the call error.
pub(crate) fn expect_single(response: BatchResponse) -> Result<Value, ClientError> {
    let mut outcomes = response.into_outcomes();
    if outcomes.len() != 1 {
        return Err(ClientError::InvalidResponse(format!(
            "expected one batch outcome, got {}",
            outcomes.len()
        )));
    }
    match outcomes.pop() {
        Some(BatchOutcome::Success(value)) => Ok(value),
        Some(BatchOutcome::Failure(err)) => Err(ClientError::Api(err)),
        None => Err(ClientError::InvalidResponse(
            "expected one batch outcome, got none".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::expect_single;
    use crate::error::{ApiError, ClientError};
    use crate::transport::{BatchOutcome, BatchResponse};

    #[test]
    fn expect_single_unwraps_the_success_payload() {
        let response = BatchResponse::new(vec![BatchOutcome::Success(json!({"id": "a"}))]);
        let value = expect_single(response).expect("single success must unwrap");
        assert_eq!(value, json!({"id": "a"}));
    }

    #[test]
    fn expect_single_surfaces_the_item_error() {
        let response = BatchResponse::new(vec![BatchOutcome::Failure(ApiError {
            code: "CH706".to_owned(),
            message: "invalid".to_owned(),
            detail: None,
            status: None,
        })]);
        let err = expect_single(response).expect_err("item failure must surface");
        assert!(matches!(err, ClientError::Api(api) if api.code == "CH706"));
    }

    #[test]
    fn expect_single_rejects_misaligned_responses() {
        let response = BatchResponse::new(vec![
            BatchOutcome::Success(json!(1)),
            BatchOutcome::Success(json!(2)),
        ]);
        let err = expect_single(response).expect_err("two outcomes must be rejected");
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
