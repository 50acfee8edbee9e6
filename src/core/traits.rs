//! Core traits for account lookup and transfer notification
//!
//! This module defines the collaborator seams of the transfer engine. The
//! engine only ever consumes these traits, so the backing store and the
//! notification channel are interchangeable: the in-memory directory and
//! logging notifier in this crate, or transport-owned implementations.

use crate::types::{Account, NotificationError, SharedAccount};

/// Trait for resolving account identifiers to shared account handles
///
/// The engine consumes exactly one directory operation: `lookup`. Account
/// creation, uniqueness enforcement, and lifetime management belong to the
/// implementation. Implementations must be safe for concurrent lookups of
/// distinct and identical identifiers.
pub trait AccountDirectory: Send + Sync {
    /// Resolve an identifier to its shared account handle
    ///
    /// Identifiers are case-sensitive. Returns `None` if no account with
    /// this identifier exists. All callers resolving the same identifier
    /// receive handles to the same underlying account object.
    fn lookup(&self, account_id: &str) -> Option<SharedAccount>;
}

/// Trait for informing account holders of balance-affecting events
///
/// The engine calls this after mutating both balances, once per side of the
/// transfer. Delivery is best-effort: a returned error is logged by the
/// engine and swallowed; it never rolls the transfer back.
pub trait Notifier: Send + Sync {
    /// Deliver an informational message to an account's holder
    ///
    /// # Arguments
    ///
    /// * `account` - The account whose holder is being notified
    /// * `message` - Human-readable description of the event
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if delivery failed. The caller treats
    /// this as non-fatal.
    fn notify(&self, account: &Account, message: &str) -> Result<(), NotificationError>;
}
