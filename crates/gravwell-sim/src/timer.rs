//! Repeating tick schedule polled from the frame loop.
//!
//! Replaces free-running interval timers: the owner feeds it its own age
//! every frame and drains the ticks that fell due.

/// Ticks at `interval, 2 * interval, ...` measured from the owner's creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickTimer {
    interval_secs: f32,
    fired: u32,
    cancelled: bool,
}

impl TickTimer {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            interval_secs,
            fired: 0,
            cancelled: false,
        }
    }

    /// Owner age at which the next tick is due.
    pub fn next_due(&self) -> f32 {
        self.interval_secs * (self.fired + 1) as f32
    }

    /// Consume the next tick if it is due at `now` and strictly before
    /// `deadline`. Call in a loop to drain every tick of a long frame.
    pub fn pop_due(&mut self, now: f32, deadline: f32) -> bool {
        if self.cancelled || self.interval_secs <= 0.0 {
            return false;
        }
        let due = self.next_due();
        if due <= now && due < deadline {
            self.fired += 1;
            true
        } else {
            false
        }
    }

    /// Stop ticking. Cancelling twice is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of ticks consumed so far.
    pub fn fired(&self) -> u32 {
        self.fired
    }
}
