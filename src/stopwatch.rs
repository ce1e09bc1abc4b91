//! Manually controlled stopwatch.

use std::fmt;
use std::time::{Duration, Instant};

/// Seconds in a day; the display wraps like a 24 hour clock.
const DAY_SECS: u64 = 24 * 60 * 60;

/// Stopwatch run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchState {
    Stopped,
    Running,
    Paused,
}

impl fmt::Display for StopwatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StopwatchState::Stopped => "Stopped",
            StopwatchState::Running => "Running",
            StopwatchState::Paused => "Paused",
        };
        f.write_str(label)
    }
}

/// Accumulates elapsed time only while running.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    state: StopwatchState,
    /// Time banked from earlier running stretches
    banked: Duration,
    /// When the current running stretch began
    resumed_at: Option<Instant>,
}

impl Stopwatch {
    /// A stopwatch at 00:00:00, stopped.
    pub fn new() -> Self {
        Self {
            state: StopwatchState::Stopped,
            banked: Duration::ZERO,
            resumed_at: None,
        }
    }

    /// A stopwatch already running from `now`.
    pub fn started(now: Instant) -> Self {
        let mut watch = Self::new();
        watch.toggle(now);
        watch
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    /// Starts a stopped or paused stopwatch, pauses a running one.
    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            StopwatchState::Running => {
                if let Some(resumed_at) = self.resumed_at.take() {
                    self.banked += now.saturating_duration_since(resumed_at);
                }
                self.state = StopwatchState::Paused;
            }
            StopwatchState::Stopped | StopwatchState::Paused => {
                self.resumed_at = Some(now);
                self.state = StopwatchState::Running;
            }
        }
    }

    /// Stops and zeroes the stopwatch.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Total running time as of `now`.
    pub fn elapsed(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.banked + now.saturating_duration_since(resumed_at),
            None => self.banked,
        }
    }

    /// Elapsed time as six `HHMMSS` digits.
    pub fn digits(&self, now: Instant) -> String {
        let secs = self.elapsed(now).as_secs() % DAY_SECS;
        format!("{:02}{:02}{:02}", secs / 3600, secs / 60 % 60, secs % 60)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_new_is_stopped_at_zero() {
        let t0 = Instant::now();
        let watch = Stopwatch::new();
        assert_eq!(watch.state(), StopwatchState::Stopped);
        assert_eq!(watch.digits(t0 + secs(30)), "000000");
    }

    #[test]
    fn test_runs_pauses_and_resumes() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();

        watch.toggle(t0);
        assert_eq!(watch.state(), StopwatchState::Running);
        assert_eq!(watch.elapsed(t0 + secs(5)), secs(5));

        watch.toggle(t0 + secs(5));
        assert_eq!(watch.state(), StopwatchState::Paused);
        // Time while paused does not count
        assert_eq!(watch.elapsed(t0 + secs(100)), secs(5));

        watch.toggle(t0 + secs(100));
        assert_eq!(watch.state(), StopwatchState::Running);
        assert_eq!(watch.elapsed(t0 + secs(110)), secs(15));
    }

    #[test]
    fn test_reset_from_running() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::started(t0);
        assert_eq!(watch.state(), StopwatchState::Running);

        watch.reset();
        assert_eq!(watch.state(), StopwatchState::Stopped);
        assert_eq!(watch.elapsed(t0 + secs(60)), Duration::ZERO);
    }

    #[test]
    fn test_digits_format() {
        let t0 = Instant::now();
        let watch = Stopwatch::started(t0);
        assert_eq!(watch.digits(t0 + secs(3_723)), "010203");
        assert_eq!(watch.digits(t0 + secs(DAY_SECS + 61)), "000101");
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(StopwatchState::Stopped.to_string(), "Stopped");
        assert_eq!(StopwatchState::Running.to_string(), "Running");
        assert_eq!(StopwatchState::Paused.to_string(), "Paused");
    }
}
