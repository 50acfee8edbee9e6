//! Thread-safe in-memory account directory
//!
//! This module provides the `InMemoryDirectory`, the sole account store:
//! a concurrent map from identifier to shared account handle.
//!
//! # Design
//!
//! The directory uses `DashMap` (a concurrent HashMap) so that lookups and
//! creations from many threads never need a global lock. The map guards
//! directory membership only; balance mutation is guarded by each account's
//! own `Mutex`, which the transfer engine acquires in a deterministic
//! order. Keeping the two layers separate means holding one account's lock
//! never blocks lookups or transfers that touch other accounts.

use crate::core::traits::AccountDirectory;
use crate::types::{Account, SharedAccount, TransferError};
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// In-memory account store keyed by identifier
///
/// Identifiers are case-sensitive and unique. Accounts are shared by
/// reference: every lookup of the same identifier returns a handle to the
/// same account object, so concurrent transfers observe each other's
/// completed mutations.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    /// Concurrent map of account identifiers to shared account handles
    accounts: DashMap<String, SharedAccount>,
}

impl InMemoryDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Admit a new account into the directory
    ///
    /// Validates the account and inserts it atomically: if several threads
    /// race to create the same identifier, exactly one succeeds and the
    /// rest receive `DuplicateAccount`.
    ///
    /// # Arguments
    ///
    /// * `account` - The account to admit
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier is empty (`EmptyAccountId`)
    /// - The initial balance is negative (`NegativeInitialBalance`)
    /// - An account with this identifier already exists (`DuplicateAccount`)
    pub fn create(&self, account: Account) -> Result<(), TransferError> {
        if account.account_id.is_empty() {
            return Err(TransferError::EmptyAccountId);
        }
        if account.balance < Decimal::ZERO {
            return Err(TransferError::negative_initial_balance(
                &account.account_id,
                account.balance,
            ));
        }

        // The entry API holds the shard lock across the vacancy check and
        // the insert, so concurrent creates of one id admit exactly one.
        let account_id = account.account_id.clone();
        let mut inserted = false;
        self.accounts.entry(account_id.clone()).or_insert_with(|| {
            inserted = true;
            Arc::new(Mutex::new(account))
        });

        if inserted {
            Ok(())
        } else {
            Err(TransferError::duplicate_account(&account_id))
        }
    }

    /// Remove all accounts from the directory
    ///
    /// Handles already held by in-flight transfers stay valid; they are
    /// simply no longer reachable through the directory.
    pub fn clear(&self) {
        self.accounts.clear();
    }

    /// Number of accounts currently in the directory
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the directory holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountDirectory for InMemoryDirectory {
    fn lookup(&self, account_id: &str) -> Option<SharedAccount> {
        self.accounts
            .get(account_id)
            .map(|entry| Arc::clone(entry.value()))
    }
}
