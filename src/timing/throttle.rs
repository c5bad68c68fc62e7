// ============================================================================
// Throttle
// Leading-edge rate limiting for UI callbacks
// ============================================================================

use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Runs a callback at most once per `wait` window.
///
/// The first call always runs. Later calls run only once strictly more than
/// `wait` has passed since the last call that ran; the rest are dropped.
///
/// ```
/// use decimal_display::timing::Throttle;
/// use std::time::Duration;
///
/// let throttle = Throttle::new(Duration::from_secs(60));
/// assert_eq!(throttle.call(|| 1), Some(1));
/// assert_eq!(throttle.call(|| 2), None);
/// ```
#[derive(Debug)]
pub struct Throttle {
    wait: Duration,
    last_run: Mutex<Option<Instant>>,
}

impl Throttle {
    /// Window used by [`Throttle::default`].
    pub const DEFAULT_WAIT: Duration = Duration::from_millis(800);

    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            last_run: Mutex::new(None),
        }
    }

    /// Length of the throttle window.
    #[inline]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Run `f` unless the window since the last run is still open.
    pub fn call<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        self.call_at(Instant::now(), f)
    }

    /// [`call`](Self::call) with an explicit clock reading.
    pub fn call_at<F, R>(&self, now: Instant, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        {
            let mut last_run = self.last_run.lock();
            if let Some(prev) = *last_run {
                if now.saturating_duration_since(prev) <= self.wait {
                    tracing::debug!(wait = ?self.wait, "throttled call dropped");
                    return None;
                }
            }
            *last_run = Some(now);
        }
        Some(f())
    }

    /// Forget the last run so the next call goes through.
    pub fn reset(&self) {
        *self.last_run.lock() = None;
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WAIT)
    }
}
