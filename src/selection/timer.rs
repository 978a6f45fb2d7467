//! The single pending reset timer.

use std::time::Duration;

/// Default reset delay in milliseconds, as written in kitchen files.
pub const DEFAULT_RESET_DELAY_MS: u64 = 1500;

/// Default delay between resolving a pair and clearing the selection.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(DEFAULT_RESET_DELAY_MS);

/// Countdown driven by host-measured elapsed time.
///
/// At most one deadline is pending. Arming replaces any previous deadline,
/// and an armed timer fires exactly once: the first [`advance`](Self::advance)
/// that brings the total elapsed time to at least the delay returns `true`
/// and disarms it.
///
/// # Example
///
/// ```rust
/// use cookpair::selection::PendingResetTimer;
/// use std::time::Duration;
///
/// let mut timer = PendingResetTimer::new();
/// timer.arm(Duration::from_millis(1500));
///
/// assert!(!timer.advance(Duration::from_millis(1000)));
/// assert!(timer.advance(Duration::from_millis(500)));
/// assert!(!timer.advance(Duration::from_millis(500)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingResetTimer {
    remaining: Option<Duration>,
}

impl PendingResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deadline `delay` from now, superseding any pending one.
    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    /// Cancel the pending deadline. Returns whether one was pending.
    pub fn disarm(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Time left before the deadline, if armed.
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Consume `elapsed` time. Returns `true` when the deadline is reached.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        let left = remaining.saturating_sub(elapsed);
        if left.is_zero() {
            self.remaining = None;
            true
        } else {
            self.remaining = Some(left);
            false
        }
    }
}
