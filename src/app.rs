//! Application state and logic.
//!
//! `ClockApp` and `StopwatchApp` own all mutable state of a run. The main loop
//! feeds them terminal sizes, clock readings and key presses; each call reports
//! whether the screen needs repainting or the run should end.

use std::time::Instant;

use chrono::{NaiveDateTime, Timelike};
use crossterm::event::KeyEvent;
use log::{debug, info};

use crate::clock::TimeSample;
use crate::error::ClockError;
use crate::event::{key_to_action, key_to_stopwatch_action, Action};
use crate::options::{forces_redraw, DisplayOptions};
use crate::resize::{TerminalState, Thresholds};
use crate::stopwatch::Stopwatch;
use crate::ui::colors::ClockColor;
use crate::ui::Scene;

/// What a key press asks the run loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running
    Continue,
    /// Leave the loop and exit normally
    Quit,
}

/// The interactive clock.
pub struct ClockApp {
    pub options: DisplayOptions,
    pub terminal: TerminalState,
    /// Any key quits
    pub screensaver: bool,
    /// Paint digit values and the diagnostic overlay
    pub test_mode: bool,
    /// Last clock reading, truncated to the second
    last_second: Option<NaiveDateTime>,
    /// What is currently on screen
    sample: Option<TimeSample>,
    force_redraw: bool,
}

impl ClockApp {
    /// Creates the clock for a terminal of the given size.
    pub fn new(
        options: DisplayOptions,
        width: u16,
        height: u16,
        screensaver: bool,
        test_mode: bool,
    ) -> Result<Self, ClockError> {
        let terminal = TerminalState::new(Thresholds::CLOCK, width, height)?;
        info!("clock starting at {width}x{height}, size {:?}", terminal.size);
        Ok(Self {
            options,
            terminal,
            screensaver,
            test_mode,
            last_second: None,
            sample: None,
            force_redraw: true,
        })
    }

    /// Re-classifies the terminal if its size changed.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), ClockError> {
        if self.terminal.update(width, height)? {
            info!("resized to {width}x{height}, size {:?}", self.terminal.size);
            self.force_redraw = true;
        }
        Ok(())
    }

    /// Takes a clock reading; returns true when the screen must be repainted.
    ///
    /// Colon blink and color cycling only react when the clock has moved on to
    /// a new second, never to redraws forced by key presses.
    pub fn tick(&mut self, now: NaiveDateTime) -> bool {
        let now = now.with_nanosecond(0).unwrap_or(now);

        // Advance blink and color cycling on a new second
        if let Some(previous) = self.last_second {
            if previous != now {
                self.options = self.options.advance_second(previous, now);
            }
        }
        self.last_second = Some(now);

        // Compare against what is on screen
        let sample = TimeSample::capture(
            now,
            self.options.military_time,
            self.options.date_pattern(),
        );
        let changed = self.sample.as_ref().map(|s| &s.digits) != Some(&sample.digits);
        let redraw = self.force_redraw || changed;
        self.sample = Some(sample);
        self.force_redraw = false;
        redraw
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if self.screensaver {
            info!("screensaver dismissed");
            return KeyOutcome::Quit;
        }
        let Some(action) = key_to_action(key) else {
            return KeyOutcome::Continue;
        };
        self.handle_action(action)
    }

    /// Applies a clock action.
    pub fn handle_action(&mut self, action: Action) -> KeyOutcome {
        if action == Action::Quit {
            info!("quit requested");
            return KeyOutcome::Quit;
        }
        debug!("action {action:?}");
        self.options = self.options.apply(action);
        // Blink and timing changes show on the next second
        if forces_redraw(action) {
            self.force_redraw = true;
        }
        KeyOutcome::Continue
    }

    /// The frame to paint for the latest reading.
    pub fn scene(&self) -> Option<Scene<'_>> {
        let sample = self.sample.as_ref()?;
        Some(Scene {
            digits: &sample.digits,
            size: self.terminal.size,
            color: self.options.digit_color(),
            background: self.options.background,
            show_seconds: self.options.show_seconds,
            colon_visible: self.options.colon_visible,
            military_time: self.options.military_time,
            am_pm: &sample.am_pm,
            date: self.options.show_date.then_some(sample.date.as_str()),
            test_mode: self.test_mode,
            stopwatch: None,
        })
    }
}

/// The manually controlled stopwatch.
pub struct StopwatchApp {
    pub color: ClockColor,
    pub background: ClockColor,
    pub terminal: TerminalState,
    pub test_mode: bool,
    pub stopwatch: Stopwatch,
    digits: String,
    force_redraw: bool,
}

impl StopwatchApp {
    /// Creates a stopwatch, optionally already running from `now`.
    pub fn new(
        color: ClockColor,
        background: ClockColor,
        width: u16,
        height: u16,
        auto_start: bool,
        now: Instant,
    ) -> Result<Self, ClockError> {
        let terminal = TerminalState::new(Thresholds::STOPWATCH, width, height)?;
        info!("stopwatch starting at {width}x{height}, size {:?}", terminal.size);
        let stopwatch = if auto_start {
            Stopwatch::started(now)
        } else {
            Stopwatch::new()
        };
        Ok(Self {
            color,
            background,
            terminal,
            test_mode: false,
            digits: stopwatch.digits(now),
            stopwatch,
            force_redraw: true,
        })
    }

    /// Re-classifies the terminal if its size changed.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<(), ClockError> {
        if self.terminal.update(width, height)? {
            info!("resized to {width}x{height}, size {:?}", self.terminal.size);
            self.force_redraw = true;
        }
        Ok(())
    }

    /// Reads the stopwatch; returns true when the screen must be repainted.
    pub fn tick(&mut self, now: Instant) -> bool {
        let digits = self.stopwatch.digits(now);
        let redraw = self.force_redraw || digits != self.digits;
        self.digits = digits;
        self.force_redraw = false;
        redraw
    }

    /// Applies a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> KeyOutcome {
        let Some(action) = key_to_stopwatch_action(key) else {
            return KeyOutcome::Continue;
        };
        debug!("stopwatch action {action:?}");
        match action {
            Action::Quit => return KeyOutcome::Quit,
            Action::StartPause => self.stopwatch.toggle(now),
            Action::ResetStopwatch => self.stopwatch.reset(),
            Action::Foreground(color) => self.color = color,
            _ => return KeyOutcome::Continue,
        }
        self.force_redraw = true;
        KeyOutcome::Continue
    }

    /// The frame to paint for the latest reading.
    pub fn scene(&self) -> Scene<'_> {
        Scene {
            digits: &self.digits,
            size: self.terminal.size,
            color: self.color,
            background: self.background,
            show_seconds: true,
            colon_visible: true,
            military_time: true,
            am_pm: "",
            date: None,
            test_mode: self.test_mode,
            stopwatch: Some(self.stopwatch.state()),
        }
    }
}
