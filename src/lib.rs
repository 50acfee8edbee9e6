//! Rust Transfer Engine Library
//! # Overview
//!
//! This library manages monetary accounts held in memory and performs
//! atomic, consistency-preserving transfers between them under concurrent
//! access.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, TransferRequest, errors)
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Transfer orchestration: deterministic lock
//!     ordering, validation, balance mutation, notification
//!   - [`core::directory`] - Thread-safe in-memory account store
//!   - [`core::traits`] - Collaborator seams for the directory and the
//!     notification channel
//!
//! # Transfer semantics
//!
//! A transfer moves a strictly positive amount from one account to another:
//!
//! - Source and destination must be distinct accounts (compared
//!   case-insensitively) and both must exist in the directory
//! - The source balance must remain strictly positive after the deduction;
//!   draining an account to exactly zero is rejected by policy
//! - Both account locks are acquired in a global lexicographic order, so
//!   arbitrary concurrent transfers over overlapping accounts serialize
//!   their critical sections without ever deadlocking
//! - Both account holders are notified after the mutation; notification
//!   failures are logged and never roll the transfer back
//!
//! # Example
//!
//! ```
//! use rust_transfer_engine::{
//!     Account, AccountDirectory, InMemoryDirectory, LoggingNotifier, TransferEngine,
//! };
//! use rust_decimal::Decimal;
//!
//! let directory = InMemoryDirectory::new();
//! directory
//!     .create(Account::with_balance("Id-100", Decimal::new(1000, 0)))
//!     .unwrap();
//! directory
//!     .create(Account::with_balance("Id-101", Decimal::new(1000, 0)))
//!     .unwrap();
//!
//! let engine = TransferEngine::new(directory, LoggingNotifier);
//! engine.transfer("Id-100", "Id-101", Decimal::new(90, 0)).unwrap();
//!
//! let source = engine.directory().lookup("Id-100").unwrap();
//! assert_eq!(source.lock().unwrap().balance, Decimal::new(910, 0));
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::{
    AccountDirectory, InMemoryDirectory, LoggingNotifier, Notifier, TransferEngine,
};
pub use crate::types::{
    Account, AccountId, NotificationError, SharedAccount, TransferError, TransferRequest,
    TransferSide,
};
