//! Account-related types for the Rust Transfer Engine
//!
//! This module defines the Account entity and the shared handle through
//! which concurrent transfers access it.

use super::error::TransferError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Account identifier
///
/// Opaque, case-sensitive identity token. Immutable after creation and
/// unique across the directory (uniqueness is enforced by the directory,
/// not by the account itself).
pub type AccountId = String;

/// Shared handle to an account
///
/// The directory hands out this handle so that all concurrent transfer
/// calls operate on the same account object by reference. The inner
/// `Mutex` is the unit of mutual exclusion: exactly one in-flight transfer
/// may hold a given account's lock at a time. The account itself performs
/// no locking; see [`crate::core::TransferEngine`] for the lock-ordering
/// protocol.
pub type SharedAccount = Arc<Mutex<Account>>;

/// A monetary account
///
/// Holds an identifier and a non-negative decimal balance. The balance is
/// only mutated through [`debit`](Account::debit) and
/// [`credit`](Account::credit), invoked by the transfer engine while it
/// holds the account's exclusive lock. Outside a transfer's critical
/// section the balance is always `>= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// The account identifier
    pub account_id: AccountId,

    /// Current balance
    ///
    /// Arbitrary-precision decimal, never negative when observed outside
    /// a transfer's critical section.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `account_id` - The identifier for this account
    ///
    /// # Returns
    ///
    /// A new Account with `balance = 0`
    pub fn new(account_id: impl Into<AccountId>) -> Self {
        Account {
            account_id: account_id.into(),
            balance: Decimal::ZERO,
        }
    }

    /// Create a new account with an initial balance
    ///
    /// The directory validates that the initial balance is non-negative
    /// before admitting the account; this constructor does not.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The identifier for this account
    /// * `balance` - The initial balance
    pub fn with_balance(account_id: impl Into<AccountId>, balance: Decimal) -> Self {
        Account {
            account_id: account_id.into(),
            balance,
        }
    }

    /// Subtract an amount from the balance
    ///
    /// The sufficiency precondition is enforced by the caller (the transfer
    /// engine, under lock), not here: this operation does not re-validate
    /// that the balance stays positive. Uses checked arithmetic so an
    /// out-of-range result is surfaced as an error instead of panicking.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to subtract
    ///
    /// # Errors
    ///
    /// Returns `TransferError::ArithmeticUnderflow` if the subtraction
    /// leaves the `Decimal` range.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), TransferError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| TransferError::arithmetic_underflow("debit", &self.account_id))?;
        Ok(())
    }

    /// Add an amount to the balance
    ///
    /// There is no business upper bound on a balance; the only failure mode
    /// is arithmetic overflow of the `Decimal` range, which is surfaced as
    /// an error instead of panicking.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount to add
    ///
    /// # Errors
    ///
    /// Returns `TransferError::ArithmeticOverflow` if the addition leaves
    /// the `Decimal` range.
    pub fn credit(&mut self, amount: Decimal) -> Result<(), TransferError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| TransferError::arithmetic_overflow("credit", &self.account_id))?;
        Ok(())
    }

    /// Check whether the balance covers a deduction
    ///
    /// Returns `true` iff `balance - amount > 0`, strictly: a deduction
    /// that would leave the account at exactly zero is insufficient. This
    /// strict inequality is deliberate business policy, not an off-by-one.
    pub fn has_sufficient_balance(&self, amount: Decimal) -> bool {
        self.balance
            .checked_sub(amount)
            .is_some_and(|remaining| remaining > Decimal::ZERO)
    }
}
