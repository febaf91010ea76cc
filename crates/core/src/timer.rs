//! Frame-driven countdown.

/// Countdown in frame ticks. One [`Countdown::tick`] per rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration_seconds: u32,
    ticks_per_second: u32,
    remaining: u32,
}

impl Countdown {
    pub fn new(duration_seconds: u32, ticks_per_second: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1);
        Self {
            duration_seconds,
            ticks_per_second,
            remaining: duration_seconds.saturating_mul(ticks_per_second),
        }
    }

    /// Advance one frame. Saturates at zero.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Whole seconds left, rounded down.
    pub fn seconds_left(&self) -> u32 {
        self.remaining / self.ticks_per_second
    }

    /// Seconds used so far, as reported on the win screen.
    pub fn elapsed_seconds(&self) -> u32 {
        self.duration_seconds.saturating_sub(self.seconds_left())
    }
}
