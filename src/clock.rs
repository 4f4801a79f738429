//! Round countdown driven by frame timestamps.

/// Default round length in seconds.
pub const ROUND_SECONDS: u32 = 30;

/// RoundClock counts whole seconds down from `duration_secs`, measured against
/// `performance.now()` style millisecond timestamps.
#[derive(Clone, Debug)]
pub struct RoundClock {
    duration_secs: u32,
    start_ms: f64,     // timestamp the round started at
    last_shown: u32,   // last remaining-seconds value reported by `poll`
}

/// What a frame tick observed on the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTick {
    Unchanged,
    Remaining(u32),
    Expired,
}

impl RoundClock {
    pub fn new(duration_secs: u32, now: f64) -> Self {
        Self {
            duration_secs,
            start_ms: now,
            last_shown: duration_secs,
        }
    }

    fn elapsed_secs(&self, now: f64) -> u32 {
        let elapsed = ((now - self.start_ms) / 1000.0).floor();
        if elapsed <= 0.0 { 0 } else { elapsed as u32 }
    }

    pub fn remaining_secs(&self, now: f64) -> u32 {
        self.duration_secs.saturating_sub(self.elapsed_secs(now))
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining_secs(now) == 0
    }

    /// Reports a change only once per displayed second; expiry is reported once.
    pub fn poll(&mut self, now: f64) -> ClockTick {
        let remaining = self.remaining_secs(now);
        if remaining == self.last_shown {
            return ClockTick::Unchanged;
        }
        self.last_shown = remaining;
        if remaining == 0 {
            ClockTick::Expired
        } else {
            ClockTick::Remaining(remaining)
        }
    }
}
