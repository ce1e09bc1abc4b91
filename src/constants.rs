//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.

use std::time::Duration;

/// Event polling timeout - doubles as the sleep between clock ticks.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Message shown when the terminal cannot fit even the small clock.
pub const TOO_SMALL_MESSAGE: &str = "Error screen / window is to small";

/// Minimum terminal dimensions per size class, as `(width, height)`.
pub mod thresholds {
    /// Clock: large digits.
    pub const CLOCK_LARGE: (u16, u16) = (90, 20);
    /// Clock: medium digits.
    pub const CLOCK_MEDIUM: (u16, u16) = (46, 10);
    /// Clock: small digits.
    pub const CLOCK_SMALL: (u16, u16) = (36, 8);

    /// Stopwatch: the state line above the digits needs extra rows.
    pub const STOPWATCH_LARGE: (u16, u16) = (90, 22);
    pub const STOPWATCH_MEDIUM: (u16, u16) = (46, 12);
    pub const STOPWATCH_SMALL: (u16, u16) = (36, 9);
}

/// Positions of auxiliary text relative to the digit block.
pub mod text {
    /// Columns between the start of the date and the AM/PM anchor.
    pub const DATE_LEFT_SHIFT: i32 = 15;
    /// Rows between the stopwatch state line and the digit block.
    pub const STOPWATCH_LINE_RISE: i32 = 2;
    /// Columns left of the horizontal center where the state line starts.
    pub const STOPWATCH_LINE_SHIFT: i32 = 10;
}

/// Date formats selectable with `E`, in cycling order.
pub const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%Y/%d/%m"];
