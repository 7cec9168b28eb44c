use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Used to script timings.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now += by;
    }

    /// Moves the clock to an arbitrary instant, including one in the past.
    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = to;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Whole seconds between two instants, rounded to nearest and never negative.
pub fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    let millis = (to - from).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    ((millis + 500) / 1000) as u64
}

/// Rounded up, with at least one minute for any finished game.
pub fn minutes_played(seconds: u64) -> u32 {
    seconds.div_ceil(60).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_seconds_rounds_to_nearest() {
        let start = Utc::now();

        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(1499)), 1);
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(1500)), 2);
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(200)), 0);
    }

    #[test]
    fn elapsed_seconds_clamps_backwards_clock() {
        let start = Utc::now();

        assert_eq!(elapsed_seconds(start, start - Duration::seconds(30)), 0);
    }

    #[test]
    fn minutes_played_rounds_up() {
        assert_eq!(minutes_played(0), 1);
        assert_eq!(minutes_played(61), 2);
        assert_eq!(minutes_played(120), 2);
    }

    #[test]
    fn manual_clock_advances_and_rewinds() {
        let start = Utc::now();
        let clock = ManualClock::new(start);

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now(), start + Duration::seconds(5));

        clock.set(start - Duration::seconds(1));
        assert_eq!(clock.now(), start - Duration::seconds(1));
    }
}
