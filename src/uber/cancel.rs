//! One-shot cancellation shared between a pagination worker and its caller

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Read side of a cancellation pair, held by the worker
#[derive(Debug, Clone)]
pub struct CancelSignal {
    state: Arc<CancelState>,
}

/// Write side of a cancellation pair, held by the caller
#[derive(Debug, Clone)]
pub struct CancelHandle {
    state: Arc<CancelState>,
}

/// Create a connected signal/handle pair
pub fn cancel_pair() -> (CancelSignal, CancelHandle) {
    let state = Arc::new(CancelState::default());
    (
        CancelSignal {
            state: Arc::clone(&state),
        },
        CancelHandle { state },
    )
}

impl CancelHandle {
    /// Request cancellation. Calling this more than once is a no-op.
    pub fn cancel(&self) {
        if !self.state.cancelled.swap(true, Ordering::SeqCst) {
            self.state.notify.notify_waiters();
        }
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }
}

impl CancelSignal {
    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.load(Ordering::SeqCst)
    }

    /// Wait until cancellation is requested. Returns immediately if already set.
    pub async fn cancelled(&self) {
        let notified = self.state.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent cancel() cannot slip between.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_pair_is_not_cancelled() {
        let (signal, handle) = cancel_pair();
        assert!(!signal.is_cancelled());
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let (signal, handle) = cancel_pair();
        handle.cancel();
        handle.cancel();
        handle.clone().cancel();
        assert!(signal.is_cancelled());
        assert!(handle.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_when_already_set() {
        let (signal, handle) = cancel_pair();
        handle.cancel();
        tokio::time::timeout(Duration::from_millis(100), signal.cancelled())
            .await
            .expect("already-cancelled signal should resolve at once");
    }

    #[tokio::test]
    async fn test_cancelled_wakes_waiter() {
        let (signal, handle) = cancel_pair();
        let waiter = tokio::spawn(async move { signal.cancelled().await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake after cancel")
            .unwrap();
    }

    #[tokio::test]
    async fn test_uncancelled_signal_keeps_waiting() {
        let (signal, _handle) = cancel_pair();
        let result = tokio::time::timeout(Duration::from_millis(50), signal.cancelled()).await;
        assert!(result.is_err());
    }
}
