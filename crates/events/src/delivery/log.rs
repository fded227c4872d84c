use async_trait::async_trait;
use roomgate_core::notify::{Notifier, NotifyError};

/// Notifier that records alerts in the log and nowhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        tracing::warn!(message, "Alert (no external channel configured)");
        Ok(())
    }
}
