use instant::Instant;
use std::time::Duration;

/// Time from `earlier` to `now`, clamped at zero when the reads are out of order.
#[inline]
pub fn elapsed_since(now: Instant, earlier: Instant) -> Duration {
    if now > earlier {
        now - earlier
    } else {
        Duration::ZERO
    }
}

/// Instant the main timers began. Written once per session.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockOrigin {
    at: Option<Instant>,
}

impl ClockOrigin {
    /// Record the origin; returns false (and keeps the first value) if already set.
    pub fn set_once(&mut self, now: Instant) -> bool {
        if self.at.is_some() {
            return false;
        }
        self.at = Some(now);
        true
    }

    pub fn get(&self) -> Option<Instant> {
        self.at
    }

    /// Whole seconds since the origin, floored. `None` before the main phase.
    pub fn elapsed_secs(&self, now: Instant) -> Option<u64> {
        self.at.map(|origin| elapsed_since(now, origin).as_secs())
    }
}
