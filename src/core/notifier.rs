//! Logging notifier
//!
//! Production default for the [`Notifier`] seam: delivery is a structured
//! log line. Real delivery channels (email, push, webhooks) live behind the
//! same trait in the transport layer.

use crate::core::traits::Notifier;
use crate::types::{Account, NotificationError};
use log::info;

/// Notifier that writes each message to the log at info level
///
/// Delivery never fails, which makes this a safe default wherever no real
/// channel is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl Notifier for LoggingNotifier {
    fn notify(&self, account: &Account, message: &str) -> Result<(), NotificationError> {
        info!("Notifying holder of account {}: {}", account.account_id, message);
        Ok(())
    }
}
