//! Refresh countdown driving the fetch cycle

/// Seconds remaining until the next refresh. Ticked once per second by the
/// main loop; when it runs out it rearms itself to the full interval and
/// reports that a fetch is due.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    pub remaining: u64,
    pub interval: u64,
}

impl Countdown {
    pub fn new(interval_secs: u64) -> Self {
        Self {
            remaining: interval_secs,
            interval: interval_secs,
        }
    }

    /// Advance by one second. Returns `true` when the countdown expired and
    /// was rearmed, which is the signal to refresh.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    /// Rearm to the full interval without triggering, used after a manual
    /// refresh.
    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }
}
