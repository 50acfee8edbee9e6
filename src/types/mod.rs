//! Types module
//!
//! Contains core data structures used throughout the crate.
//! This module organizes types into logical submodules:
//! - `account`: the Account entity and its shared handle
//! - `transfer`: the transient transfer request value object
//! - `error`: error types for the transfer engine

pub mod account;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountId, SharedAccount};
pub use error::{NotificationError, TransferError, TransferSide};
pub use transfer::TransferRequest;
