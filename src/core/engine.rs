//! Transfer processing engine
//!
//! This module provides the TransferEngine that orchestrates a single
//! atomic funds transfer: it resolves both accounts through the directory,
//! establishes a deterministic lock order over them, validates balance
//! sufficiency under the combined lock, mutates both balances, and emits
//! best-effort notifications.
//!
//! The engine enforces the business rules:
//! - Source and destination must be distinct accounts (case-insensitive)
//! - Both accounts must exist before anything is touched
//! - The amount must be strictly positive
//! - The source balance must remain strictly positive after deduction
//!
//! # Deadlock avoidance
//!
//! Every transfer acquires its two account locks in the same global order:
//! the account whose identifier is case-insensitively lexicographically
//! greater is locked first, then the lesser. Any two concurrent transfers
//! sharing one or both accounts therefore acquire locks in the same
//! relative order regardless of transfer direction, which rules out
//! circular wait. Transfers over disjoint account pairs never contend at
//! all.

use crate::core::traits::{AccountDirectory, Notifier};
use crate::types::{Account, TransferError, TransferRequest, TransferSide};
use log::{info, warn};
use rust_decimal::Decimal;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Transfer processing engine
///
/// Coordinates the account directory and the notifier to execute transfers.
/// All methods take `&self`, so a single engine can be shared across
/// threads (for example behind an `Arc`) and process concurrent transfer
/// requests safely.
pub struct TransferEngine<D, N> {
    directory: D,
    notifier: N,
}

impl<D, N> TransferEngine<D, N>
where
    D: AccountDirectory,
    N: Notifier,
{
    /// Create a new TransferEngine over a directory and a notifier
    pub fn new(directory: D, notifier: N) -> Self {
        TransferEngine {
            directory,
            notifier,
        }
    }

    /// The account directory this engine resolves identifiers through
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Execute a transfer request
    ///
    /// Convenience wrapper over [`transfer`](TransferEngine::transfer) for
    /// callers holding a [`TransferRequest`] value object.
    pub fn execute(&self, request: &TransferRequest) -> Result<(), TransferError> {
        self.transfer(
            &request.from_account_id,
            &request.to_account_id,
            request.amount,
        )
    }

    /// Transfer an amount between two accounts
    ///
    /// Validates the request, then performs the debit and credit atomically
    /// under both account locks and notifies both account holders. Every
    /// validation failure is terminal: no balance changes before all
    /// validations pass, so partial states never escape.
    ///
    /// # Arguments
    ///
    /// * `from_id` - Identifier of the source account
    /// * `to_id` - Identifier of the destination account
    /// * `amount` - Amount to move; must be strictly positive
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the transfer was applied (notification failures do not
    ///   fail the transfer)
    /// * `Err(TransferError)` if any validation failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `from_id` and `to_id` name the same account, case-insensitively
    /// - Either account is absent from the directory
    /// - The amount is zero or negative
    /// - The source balance would not stay strictly positive after the
    ///   deduction
    pub fn transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        if from_id.to_lowercase() == to_id.to_lowercase() {
            return Err(TransferError::same_account(from_id));
        }

        let from_handle = self
            .directory
            .lookup(from_id)
            .ok_or_else(|| TransferError::account_not_found(TransferSide::From, from_id))?;
        let to_handle = self
            .directory
            .lookup(to_id)
            .ok_or_else(|| TransferError::account_not_found(TransferSide::To, to_id))?;

        if amount <= Decimal::ZERO {
            return Err(TransferError::invalid_amount(amount));
        }

        // Global lock order: case-insensitively greater identifier first.
        // The same-account check above already rejected identifiers that
        // collide case-insensitively, so the order over this pair is strict.
        let from_is_first = from_id.to_lowercase() > to_id.to_lowercase();
        let (first_handle, second_handle) = if from_is_first {
            (&from_handle, &to_handle)
        } else {
            (&to_handle, &from_handle)
        };

        let mut first_guard = lock_account(first_handle);
        let mut second_guard = lock_account(second_handle);
        let (from_account, to_account) = if from_is_first {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };

        if !from_account.has_sufficient_balance(amount) {
            info!(
                "Rejecting transfer of {} from account {}: balance {} would not stay positive",
                amount, from_id, from_account.balance
            );
            return Err(TransferError::insufficient_balance(
                from_id,
                from_account.balance,
                amount,
            ));
        }

        // Credit first: a destination overflow aborts with the source
        // untouched. The debit cannot fail once sufficiency holds.
        to_account.credit(amount)?;
        from_account.debit(amount)?;

        self.notify(
            from_account,
            &format!("{} has been transferred to account {}", amount, to_id),
        );
        self.notify(
            to_account,
            &format!("{} has been received from account {}", amount, from_id),
        );

        Ok(())
    }

    /// Deliver a best-effort notification
    ///
    /// Delivery failures are logged at warn level and swallowed; the
    /// transfer they describe has already been applied and stays applied.
    fn notify(&self, account: &Account, message: &str) {
        if let Err(e) = self.notifier.notify(account, message) {
            warn!(
                "Failed to notify account {}: {}",
                account.account_id, e
            );
        }
    }
}

/// Acquire an account's lock, recovering from poisoning
///
/// A poisoned lock means a peer thread panicked while holding the guard.
/// Balance mutation itself never panics partway (both halves are checked
/// and applied without intervening panics), so a poisoned account is still
/// arithmetically consistent and the transfer can proceed.
fn lock_account(handle: &Mutex<Account>) -> MutexGuard<'_, Account> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
