//! Error types for the Rust Transfer Engine
//!
//! This module defines all error types that can occur during transfer
//! processing and account management. Every validation failure is terminal:
//! the engine aborts before mutating either balance, so partial states
//! never escape.
//!
//! # Error Categories
//!
//! - **Validation Errors**: same account, missing account, invalid amount
//! - **Balance Errors**: insufficient balance for the requested deduction
//! - **Directory Errors**: duplicate id, empty id, negative initial balance
//! - **Arithmetic Errors**: overflow/underflow in balance calculations

use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Which side of a transfer an account sits on
///
/// Used by [`TransferError::AccountNotFound`] to report whether the missing
/// account was the source or the destination of the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    /// The source account (funds are debited from it)
    From,
    /// The destination account (funds are credited to it)
    To,
}

impl fmt::Display for TransferSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferSide::From => write!(f, "from"),
            TransferSide::To => write!(f, "to"),
        }
    }
}

/// Main error type for the transfer engine
///
/// This enum represents all possible errors that can occur during transfer
/// processing and directory operations. Each variant includes relevant
/// context to help diagnose the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    /// Source and destination identifiers are the same account
    ///
    /// The comparison is case-insensitive; a transfer from `Id-100` to
    /// `ID-100` is rejected. Checked before anything else, for any amount.
    #[error("Cannot transfer from account {id} to itself")]
    SameAccount {
        /// The identifier given for both sides
        id: String,
    },

    /// One of the two accounts is absent from the directory
    ///
    /// Reported before any balance changes; `side` says whether the source
    /// or the destination was missing.
    #[error("{side_title} account {id} does not exist", side_title = capitalize(side))]
    AccountNotFound {
        /// Which side of the transfer the missing account was on
        side: TransferSide,
        /// The identifier that failed to resolve
        id: String,
    },

    /// Transfer amount is not strictly positive
    ///
    /// Zero and negative amounts are both rejected.
    #[error("Transfer amount must be positive, got {amount}")]
    InvalidAmount {
        /// The offending amount
        amount: Decimal,
    },

    /// Source balance would not remain strictly positive after deduction
    ///
    /// A transfer that would leave the source at exactly zero is rejected;
    /// the deduction must leave a positive remainder.
    #[error(
        "Insufficient balance on account {id}: balance {balance}, requested {requested}"
    )]
    InsufficientBalance {
        /// The source account identifier
        id: String,
        /// Balance at the time of the sufficiency check (under lock)
        balance: Decimal,
        /// The requested transfer amount
        requested: Decimal,
    },

    /// An account with this identifier already exists in the directory
    #[error("Account id {id} already exists")]
    DuplicateAccount {
        /// The identifier that is already taken
        id: String,
    },

    /// Account identifier is empty
    ///
    /// The directory rejects accounts with an empty identifier at creation.
    #[error("Account id must not be empty")]
    EmptyAccountId,

    /// Initial balance is negative
    ///
    /// Accounts are created with a balance of zero or more.
    #[error("Initial balance for account {id} must not be negative, got {balance}")]
    NegativeInitialBalance {
        /// The identifier of the rejected account
        id: String,
        /// The offending initial balance
        balance: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The mutation is rejected to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        id: String,
    },

    /// Arithmetic underflow would occur
    ///
    /// The mutation is rejected to maintain account integrity.
    #[error("Arithmetic underflow in {operation} for account {id}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// Account identifier
        id: String,
    },
}

fn capitalize(side: &TransferSide) -> &'static str {
    match side {
        TransferSide::From => "From",
        TransferSide::To => "To",
    }
}

// Helper functions for creating common errors

impl TransferError {
    /// Create a SameAccount error
    pub fn same_account(id: &str) -> Self {
        TransferError::SameAccount { id: id.to_string() }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(side: TransferSide, id: &str) -> Self {
        TransferError::AccountNotFound {
            side,
            id: id.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        TransferError::InvalidAmount { amount }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(id: &str, balance: Decimal, requested: Decimal) -> Self {
        TransferError::InsufficientBalance {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(id: &str) -> Self {
        TransferError::DuplicateAccount { id: id.to_string() }
    }

    /// Create a NegativeInitialBalance error
    pub fn negative_initial_balance(id: &str, balance: Decimal) -> Self {
        TransferError::NegativeInitialBalance {
            id: id.to_string(),
            balance,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        TransferError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, id: &str) -> Self {
        TransferError::ArithmeticUnderflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }
}

/// Error reported by a [`Notifier`](crate::core::Notifier) implementation
///
/// Notification delivery is best-effort: the engine logs this error and
/// carries on. It never rolls a transfer back.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Notification delivery failed: {reason}")]
pub struct NotificationError {
    /// Description of the delivery failure
    pub reason: String,
}

impl NotificationError {
    /// Create a NotificationError from any displayable reason
    pub fn new(reason: impl Into<String>) -> Self {
        NotificationError {
            reason: reason.into(),
        }
    }
}
