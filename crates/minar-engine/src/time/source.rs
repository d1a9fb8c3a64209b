use chrono::{Datelike, Local, Timelike};

use super::WallTime;

/// Source of wall-clock instants.
///
/// The clock engine reads through this trait instead of the host clock
/// directly, so tests can supply deterministic instants.
pub trait ClockSource: Send {
    /// Captures the current moment.
    fn now(&self) -> WallTime;

    /// Identifier for logging.
    fn name(&self) -> &str {
        "clock"
    }
}

/// Live local-time clock for production use.
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime::new(
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
        )
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Clock frozen at a single instant.
///
/// Every `now()` returns the same value, which makes render output a pure
/// function of construction arguments.
#[derive(Debug, Copy, Clone)]
pub struct FixedClock(pub WallTime);

impl ClockSource for FixedClock {
    fn now(&self) -> WallTime {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── system ────────────────────────────────────────────────────────────

    #[test]
    fn system_clock_produces_valid_fields() {
        let t = SystemClock::new().now();
        assert!((1..=12).contains(&t.month));
        assert!((1..=31).contains(&t.day));
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }

    // ── fixed ─────────────────────────────────────────────────────────────

    #[test]
    fn fixed_clock_never_advances() {
        let clock = FixedClock(WallTime::new(2000, 1, 1, 12, 30, 45));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().second, 45);
    }
}
