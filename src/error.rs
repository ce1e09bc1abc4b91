//! Error types surfaced at the process boundary.

use thiserror::Error;

use crate::constants::TOO_SMALL_MESSAGE;

/// Failures that end a clock or stopwatch run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The terminal is below the smallest size class.
    #[error("{TOO_SMALL_MESSAGE}")]
    TerminalTooSmall { width: u16, height: u16 },

    /// `--test_time` was not `H:MM:SS`.
    #[error("invalid test time '{0}', expected HH:MM:SS")]
    InvalidTestTime(String),

    /// `--test_date` was not `YYYY-M-D`.
    #[error("invalid test date '{0}', expected YYYY-M-D")]
    InvalidTestDate(String),
}
