//! Time sources and the per-tick time sample.

use std::time::Instant;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::ClockError;

/// Anything that can tell the current wall-clock time.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// The real local time.
pub struct WallClock;

impl TimeSource for WallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A deterministic clock starting at a fixed moment.
///
/// A ticking clock advances with real elapsed time from its creation; a
/// frozen one always reports the start moment.
pub struct TestClock {
    start: NaiveDateTime,
    origin: Instant,
    ticking: bool,
}

impl TestClock {
    /// A clock that advances one second per real second.
    pub fn ticking(start: NaiveDateTime) -> Self {
        Self {
            start,
            origin: Instant::now(),
            ticking: true,
        }
    }

    /// A clock stuck at `start`.
    pub fn frozen(start: NaiveDateTime) -> Self {
        Self {
            start,
            origin: Instant::now(),
            ticking: false,
        }
    }
}

impl TimeSource for TestClock {
    fn now(&self) -> NaiveDateTime {
        if !self.ticking {
            return self.start;
        }
        let elapsed = TimeDelta::from_std(self.origin.elapsed()).unwrap_or(TimeDelta::zero());
        self.start + elapsed
    }
}

/// Parses `--test_time` (`H:MM:SS`, hours may be one digit).
pub fn parse_test_time(s: &str) -> Result<NaiveTime, ClockError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").map_err(|_| ClockError::InvalidTestTime(s.to_string()))
}

/// Parses `--test_date` (`YYYY-M-D`, month and day may be one digit).
pub fn parse_test_date(s: &str) -> Result<NaiveDate, ClockError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ClockError::InvalidTestDate(s.to_string()))
}

/// The formatted time for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSample {
    /// Six digits, `HHMMSS` or 12-hour `hhmmss`
    pub digits: String,
    /// `AM`/`PM`, empty in military time
    pub am_pm: String,
    pub date: String,
}

impl TimeSample {
    /// Formats `now` for display.
    pub fn capture(now: NaiveDateTime, military_time: bool, date_pattern: &str) -> Self {
        let (digits, am_pm) = if military_time {
            (now.format("%H%M%S").to_string(), String::new())
        } else {
            (now.format("%I%M%S").to_string(), now.format("%p").to_string())
        };
        Self {
            digits,
            am_pm,
            date: now.date().format(date_pattern).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn moment(time: &str) -> NaiveDateTime {
        parse_test_date("1970-1-2")
            .unwrap()
            .and_time(parse_test_time(time).unwrap())
    }

    #[test]
    fn test_twelve_hour_samples() {
        let s = TimeSample::capture(moment("14:00:00"), false, "%d/%m/%Y");
        assert_eq!(s.digits, "020000");
        assert_eq!(s.am_pm, "PM");
        assert_eq!(s.date, "02/01/1970");

        let s = TimeSample::capture(moment("2:00:00"), false, "%d/%m/%Y");
        assert_eq!(s.digits, "020000");
        assert_eq!(s.am_pm, "AM");
    }

    #[test]
    fn test_military_samples() {
        let s = TimeSample::capture(moment("14:00:00"), true, "%Y/%m/%d");
        assert_eq!(s.digits, "140000");
        assert_eq!(s.am_pm, "");
        assert_eq!(s.date, "1970/01/02");
    }

    #[test]
    fn test_midnight_is_twelve() {
        let s = TimeSample::capture(moment("00:05:00"), false, "%d/%m/%Y");
        assert_eq!(s.digits, "120500");
        assert_eq!(s.am_pm, "AM");
    }

    #[test]
    fn test_bad_test_values() {
        assert_eq!(
            parse_test_time("25:00:00"),
            Err(ClockError::InvalidTestTime("25:00:00".into()))
        );
        assert!(parse_test_time("noon").is_err());
        assert!(parse_test_date("1970-13-1").is_err());
        assert!(parse_test_date("yesterday").is_err());
    }

    #[test]
    fn test_frozen_clock_does_not_move() {
        let clock = TestClock::frozen(moment("02:00:00"));
        sleep(Duration::from_millis(20));
        assert_eq!(clock.now(), moment("02:00:00"));
    }

    #[test]
    fn test_ticking_clock_moves_forward() {
        let start = moment("16:00:00");
        let clock = TestClock::ticking(start);
        sleep(Duration::from_millis(20));
        assert!(clock.now() > start);
        assert!(clock.now() < moment("16:00:05"));
    }
}
