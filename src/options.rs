//! Display options and the keystroke transition function.
//!
//! `DisplayOptions` is a plain value. The run loop owns one instance and feeds
//! it through [`DisplayOptions::apply`] for every key; the clock-driven changes
//! (colon blink, color cycling) live in [`DisplayOptions::advance_second`].

use chrono::{NaiveDateTime, Timelike};

use crate::constants::DATE_FORMATS;
use crate::event::Action;
use crate::ui::colors::ClockColor;

/// How the digit color is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// The user-selected color
    Static,
    /// Walks through the cycle palette
    Cycling,
}

/// When cycling mode moves to the next color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleTiming {
    PerSecond,
    PerMinute,
    PerHour,
}

impl CycleTiming {
    /// Maps the `--cycle_timing` value (1, 2 or 3).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(CycleTiming::PerSecond),
            2 => Some(CycleTiming::PerMinute),
            3 => Some(CycleTiming::PerHour),
            _ => None,
        }
    }
}

/// Everything the user can change while the clock runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Digit color in static mode
    pub color: ClockColor,
    pub background: ClockColor,
    pub show_seconds: bool,
    /// 24 hour time, no AM/PM marker
    pub military_time: bool,
    pub show_date: bool,
    /// Index into `DATE_FORMATS`
    pub date_format: usize,
    pub blink_colon: bool,
    pub colon_visible: bool,
    pub color_mode: ColorMode,
    pub cycle_timing: CycleTiming,
    /// Index into `ClockColor::CYCLE`
    pub cycle_phase: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: ClockColor::White,
            background: ClockColor::Black,
            show_seconds: true,
            military_time: false,
            show_date: false,
            date_format: 0,
            blink_colon: false,
            colon_visible: true,
            color_mode: ColorMode::Static,
            cycle_timing: CycleTiming::PerMinute,
            cycle_phase: 0,
        }
    }
}

impl DisplayOptions {
    /// Returns the options after a keystroke action.
    ///
    /// Actions that do not concern the clock face (quit, stopwatch controls)
    /// leave the options unchanged.
    pub fn apply(self, action: Action) -> Self {
        let mut next = self;
        match action {
            Action::ToggleColorMode => {
                next.color_mode = match self.color_mode {
                    ColorMode::Static => ColorMode::Cycling,
                    ColorMode::Cycling => ColorMode::Static,
                };
            }
            Action::ToggleSeconds => next.show_seconds = !self.show_seconds,
            Action::ToggleBlink => {
                next.blink_colon = !self.blink_colon;
                if !next.blink_colon {
                    next.colon_visible = true;
                }
            }
            Action::ToggleMilitary => next.military_time = !self.military_time,
            Action::ToggleDate => next.show_date = !self.show_date,
            Action::NextDateFormat if self.show_date => {
                next.date_format = (self.date_format + 1) % DATE_FORMATS.len();
            }
            Action::Reset => next = Self::default(),
            Action::ToggleColon => {
                next.colon_visible = !self.colon_visible;
                next.blink_colon = false;
            }
            Action::SetCycleTiming(timing) => next.cycle_timing = timing,
            Action::Foreground(color) if self.color_mode == ColorMode::Static => {
                next.color = color;
            }
            Action::Background(color) => next.background = color,
            _ => {}
        }
        next
    }

    /// Reacts to the clock moving from `previous` to `now` (a new second).
    ///
    /// Flips the colon when blinking and advances the cycle palette when the
    /// configured timing boundary was crossed.
    pub fn advance_second(self, previous: NaiveDateTime, now: NaiveDateTime) -> Self {
        let mut next = self;
        if self.blink_colon {
            next.colon_visible = !self.colon_visible;
        }
        if self.color_mode == ColorMode::Cycling {
            let crossed = match self.cycle_timing {
                CycleTiming::PerSecond => true,
                CycleTiming::PerMinute => now.second() == 0,
                CycleTiming::PerHour => now.hour() != previous.hour(),
            };
            if crossed {
                next.cycle_phase = (self.cycle_phase + 1) % ClockColor::CYCLE.len();
            }
        }
        next
    }

    /// The color the digits are drawn in right now.
    pub fn digit_color(&self) -> ClockColor {
        match self.color_mode {
            ColorMode::Static => self.color,
            ColorMode::Cycling => ClockColor::CYCLE[self.cycle_phase],
        }
    }

    /// The strftime pattern of the active date format.
    pub fn date_pattern(&self) -> &'static str {
        DATE_FORMATS[self.date_format]
    }
}

/// Returns true when an action must repaint the screen immediately.
///
/// Blink and cycle-timing changes only show up on the next clock second.
pub fn forces_redraw(action: Action) -> bool {
    !matches!(
        action,
        Action::Quit | Action::ToggleBlink | Action::SetCycleTiming(_)
    )
}
