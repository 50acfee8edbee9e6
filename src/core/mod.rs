//! Core business logic module
//!
//! This module contains the transfer processing components:
//! - `traits` - Collaborator seams (account lookup, notification)
//! - `engine` - Transfer orchestration: lock ordering, validation, mutation
//! - `directory` - Thread-safe in-memory account store
//! - `notifier` - Logging-backed notification default

pub mod directory;
pub mod engine;
pub mod notifier;
pub mod traits;

pub use directory::InMemoryDirectory;
pub use engine::TransferEngine;
pub use notifier::LoggingNotifier;
pub use traits::{AccountDirectory, Notifier};
