// ============================================================================
// Debouncer
// Trailing-edge debouncing on the tokio runtime
// ============================================================================

use parking_lot::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs only the last callback of a burst, `wait` after the burst ends.
///
/// Each [`call`](Debouncer::call) cancels the pending callback, if any, and
/// schedules the new one. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Delay used by [`Debouncer::default`].
    pub const DEFAULT_WAIT: Duration = Duration::from_millis(800);

    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `f`, replacing any callback that has not fired yet.
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let wait = self.wait;
        let task = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            f();
        });

        if let Some(previous) = self.pending.lock().replace(task) {
            if !previous.is_finished() {
                tracing::debug!(wait = ?self.wait, "debounced call superseded");
            }
            previous.abort();
        }
    }

    /// Drop the pending callback without running it.
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WAIT)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            pending.abort();
        }
    }
}
