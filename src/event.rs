//! Event handling module.
//!
//! This module polls keyboard events using crossterm and maps keystrokes to
//! clock and stopwatch actions.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::POLL_TIMEOUT;
use crate::options::CycleTiming;
use crate::ui::colors::ClockColor;

/// Represents the different actions a user can take while the clock runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Switch between static and cycling color modes
    ToggleColorMode,
    /// Show or hide the seconds digits
    ToggleSeconds,
    /// Turn colon blinking on or off
    ToggleBlink,
    /// Switch between 12 and 24 hour time
    ToggleMilitary,
    /// Show or hide the date
    ToggleDate,
    /// Advance to the next date format
    NextDateFormat,
    /// Restore every display option to its default
    Reset,
    /// Show or hide the colon (cancels blinking)
    ToggleColon,
    /// Change how often cycling mode advances
    SetCycleTiming(CycleTiming),
    /// Change the digit color
    Foreground(ClockColor),
    /// Change the background color
    Background(ClockColor),
    /// Start, pause or resume the stopwatch
    StartPause,
    /// Stop the stopwatch and zero it
    ResetStopwatch,
}

/// Polls terminal events.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Waits up to the poll timeout for a key press.
    ///
    /// Returns Ok(None) if no key was pressed within the timeout. Resize and
    /// mouse events are swallowed; the caller re-reads the terminal size on
    /// every tick.
    pub fn next(&self) -> io::Result<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Only process key press events (not releases)
                if key_event.kind == KeyEventKind::Press {
                    return Ok(Some(key_event));
                }
            }
        }
        Ok(None)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Set when SIGINT arrives from outside the terminal.
///
/// Raw mode turns a typed Ctrl+C into a key press, but a signal sent with
/// `kill` still reaches the process. The run loops check this once per tick
/// and leave through the normal restore path.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    raised: Arc<AtomicBool>,
}

impl Interrupt {
    /// Installs the process-wide SIGINT handler.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let interrupt = Self::default();
        let handle = interrupt.clone();
        ctrlc::set_handler(move || handle.raise())?;
        Ok(interrupt)
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

/// Converts a key event to a clock action.
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    // Raw mode delivers Ctrl+C as a key press
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let KeyCode::Char(ch) = key.code else {
        return None;
    };

    if let Some(color) = foreground_key(ch) {
        return Some(Action::Foreground(color));
    }
    if let Some(color) = background_key(ch) {
        return Some(Action::Background(color));
    }

    match ch {
        'q' | 'Q' => Some(Action::Quit),
        'c' => Some(Action::ToggleColorMode),
        's' => Some(Action::ToggleSeconds),
        'b' => Some(Action::ToggleBlink),
        'm' => Some(Action::ToggleMilitary),
        'e' => Some(Action::ToggleDate),
        'E' => Some(Action::NextDateFormat),
        'd' => Some(Action::Reset),
        'n' => Some(Action::ToggleColon),
        '1' => Some(Action::SetCycleTiming(CycleTiming::PerSecond)),
        '2' => Some(Action::SetCycleTiming(CycleTiming::PerMinute)),
        '3' => Some(Action::SetCycleTiming(CycleTiming::PerHour)),
        _ => None,
    }
}

/// Converts a key event to a stopwatch action.
pub fn key_to_stopwatch_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let KeyCode::Char(ch) = key.code else {
        return None;
    };

    match ch {
        'q' | 'Q' => Some(Action::Quit),
        'g' => Some(Action::StartPause),
        'h' => Some(Action::ResetStopwatch),
        other => foreground_key(other).map(Action::Foreground),
    }
}

/// Digit color keys: r t y u i o p [
fn foreground_key(ch: char) -> Option<ClockColor> {
    match ch {
        'r' => Some(ClockColor::Red),
        't' => Some(ClockColor::Green),
        'y' => Some(ClockColor::Blue),
        'u' => Some(ClockColor::Yellow),
        'i' => Some(ClockColor::Magenta),
        'o' => Some(ClockColor::Cyan),
        'p' => Some(ClockColor::White),
        '[' => Some(ClockColor::Black),
        _ => None,
    }
}

/// Background color keys: the shifted row, R T Y U I O P {
fn background_key(ch: char) -> Option<ClockColor> {
    match ch {
        'R' => Some(ClockColor::Red),
        'T' => Some(ClockColor::Green),
        'Y' => Some(ClockColor::Blue),
        'U' => Some(ClockColor::Yellow),
        'I' => Some(ClockColor::Magenta),
        'O' => Some(ClockColor::Cyan),
        'P' => Some(ClockColor::White),
        '{' => Some(ClockColor::Black),
        _ => None,
    }
}
