//! Outbound notification seam.
//!
//! A [`Notifier`] pushes a one-line text message to some external channel.
//! Callers never await it directly: [`dispatch`] runs the send on a detached
//! task bounded by a timeout, and any failure is logged and dropped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;

/// Default upper bound on a single notification attempt.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Error type for notification delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// Network-level failure (DNS, connect, TLS, body).
    #[error("Notification transport error: {0}")]
    Transport(String),

    /// The remote service answered with a non-2xx status.
    #[error("Notification service returned HTTP {0}")]
    HttpStatus(u16),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `message` to the external channel.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

/// Fire-and-forget delivery of `message`.
///
/// The returned handle resolves once the attempt finished, failed, or timed
/// out. Request handlers drop it; tests await it.
pub fn dispatch(notifier: Arc<dyn Notifier>, message: String, timeout: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::time::timeout(timeout, notifier.send(&message)).await {
            Ok(Ok(())) => {
                tracing::info!(message = %message, "Notification delivered");
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, message = %message, "Notification delivery failed");
            }
            Err(_) => {
                tracing::error!(
                    timeout_ms = timeout.as_millis() as u64,
                    message = %message,
                    "Notification delivery timed out"
                );
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Failing(AtomicUsize);

    #[async_trait]
    impl Notifier for Failing {
        async fn send(&self, _message: &str) -> Result<(), NotifyError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError::HttpStatus(401))
        }
    }

    struct Stalled;

    #[async_trait]
    impl Notifier for Stalled {
        async fn send(&self, _message: &str) -> Result<(), NotifyError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn failure_is_absorbed() {
        let notifier = Arc::new(Failing(AtomicUsize::new(0)));
        let handle = dispatch(notifier.clone(), "hello".into(), DEFAULT_NOTIFY_TIMEOUT);
        handle.await.unwrap();
        assert_eq!(notifier.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stalled_send_is_bounded_by_timeout() {
        let handle = dispatch(Arc::new(Stalled), "hello".into(), Duration::from_millis(50));
        handle.await.unwrap();
    }

    #[test]
    fn error_display() {
        assert_eq!(
            NotifyError::HttpStatus(502).to_string(),
            "Notification service returned HTTP 502"
        );
    }
}
