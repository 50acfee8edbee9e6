//! Transfer request value object
//!
//! A transfer request is transient: it exists only for the duration of one
//! transfer call and is never persisted. The serde derives give the
//! (out-of-scope) transport layer a ready-made JSON shape.

use super::account::AccountId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to move funds between two accounts
///
/// References exactly two distinct, pre-existing accounts by identity; it
/// does not own them. The engine validates the identifiers and the amount
/// before touching either balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Identifier of the account funds are taken from
    pub from_account_id: AccountId,

    /// Identifier of the account funds are moved to
    pub to_account_id: AccountId,

    /// Amount to move; must be strictly positive
    pub amount: Decimal,
}

impl TransferRequest {
    /// Create a new transfer request
    pub fn new(
        from_account_id: impl Into<AccountId>,
        to_account_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Self {
        TransferRequest {
            from_account_id: from_account_id.into(),
            to_account_id: to_account_id.into(),
            amount,
        }
    }
}
