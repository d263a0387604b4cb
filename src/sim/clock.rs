//! Scene clock and repeating triggers
//!
//! The clock is advanced by the host loop's `dt`, never by wall time, so the
//! simulation stays deterministic and pausable. Repeating triggers are polled
//! from the tick; there are no threads or callbacks behind them.

use serde::{Deserialize, Serialize};

/// Monotonic milliseconds since scene start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clock {
    elapsed_ms: f64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one host tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed_ms += f64::from(dt) * 1000.0;
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

/// Repeating trigger that fires once per crossed interval boundary.
///
/// Tolerant of variable tick length: if several boundaries were crossed since
/// the last poll (a stalled host), it fires once and re-arms past the backlog
/// rather than bursting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatingTimer {
    interval_ms: f64,
    next_due_ms: f64,
    cancelled: bool,
}

impl RepeatingTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_due_ms: interval_ms,
            cancelled: false,
        }
    }

    /// Returns true when the trigger fires for `now_ms`
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.cancelled || now_ms < self.next_due_ms {
            return false;
        }
        let intervals_behind = ((now_ms - self.next_due_ms) / self.interval_ms).floor() + 1.0;
        self.next_due_ms += intervals_behind * self.interval_ms;
        true
    }

    /// Permanently disarm; a cancelled timer never fires again
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_advances_in_ms() {
        let mut clock = Clock::new();
        assert_eq!(clock.elapsed_ms(), 0.0);

        clock.advance(1.0 / 60.0);
        assert!((clock.elapsed_ms() - 16.666).abs() < 0.01);

        for _ in 0..59 {
            clock.advance(1.0 / 60.0);
        }
        assert!((clock.elapsed_ms() - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_timer_fires_at_boundary() {
        let mut timer = RepeatingTimer::new(2000.0);
        assert!(!timer.poll(0.0));
        assert!(!timer.poll(1999.9));
        assert!(timer.poll(2000.0));
        // Same interval doesn't fire twice
        assert!(!timer.poll(2500.0));
        assert!(timer.poll(4000.0));
    }

    #[test]
    fn test_timer_skips_backlog() {
        let mut timer = RepeatingTimer::new(2000.0);
        // Host stalled across three boundaries: one fire, re-armed past them
        assert!(timer.poll(6500.0));
        assert!(!timer.poll(7999.0));
        assert!(timer.poll(8000.0));
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timer = RepeatingTimer::new(2000.0);
        timer.cancel();
        assert!(timer.is_cancelled());
        assert!(!timer.poll(2000.0));
        assert!(!timer.poll(1_000_000.0));
    }
}
