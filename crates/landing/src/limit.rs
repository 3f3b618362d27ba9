//! Timer-based rate limiting for event handlers.
//!
//! Scroll and resize handlers on the page fire far more often than their
//! work needs to run. [`Debounce`] delays a callback until the events go
//! quiet, cancelling the pending timer on every new call; [`Throttle`] lets a
//! callback run at most once per cooldown window, on the leading edge.

use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Trailing-edge debouncer.
///
/// Each `call` cancels any pending invocation and schedules the new callback
/// to run after the delay. Only the last callback in a burst runs. The
/// pending timer is aborted when the debouncer is dropped.
#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debounce {
    /// Create a debouncer with the given quiet-period delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `callback` to run after the delay, replacing any pending one.
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        self.pending = Some(task.abort_handle());
    }

    /// Abort the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Leading-edge throttle.
///
/// The first `call` in a window runs immediately; further calls within the
/// cooldown are dropped.
#[derive(Debug)]
pub struct Throttle {
    cooldown: Duration,
    last_run: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given cooldown window.
    #[must_use]
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_run: None,
        }
    }

    /// Run `callback` unless one already ran within the cooldown.
    ///
    /// Returns whether the callback ran.
    pub fn call<F>(&mut self, callback: F) -> bool
    where
        F: FnOnce(),
    {
        let now = Instant::now();
        if let Some(last) = self.last_run
            && now.duration_since(last) < self.cooldown
        {
            return false;
        }
        self.last_run = Some(now);
        callback();
        true
    }
}
