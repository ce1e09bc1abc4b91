//! Picks the rendering scale from the terminal size.

use crate::constants::thresholds;
use crate::error::ClockError;

/// Discrete rendering scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

/// Minimum `(width, height)` for each size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub large: (u16, u16),
    pub medium: (u16, u16),
    pub small: (u16, u16),
}

impl Thresholds {
    /// Thresholds for the clock face.
    pub const CLOCK: Self = Self {
        large: thresholds::CLOCK_LARGE,
        medium: thresholds::CLOCK_MEDIUM,
        small: thresholds::CLOCK_SMALL,
    };

    /// Thresholds for the stopwatch, which paints a state line above the digits.
    pub const STOPWATCH: Self = Self {
        large: thresholds::STOPWATCH_LARGE,
        medium: thresholds::STOPWATCH_MEDIUM,
        small: thresholds::STOPWATCH_SMALL,
    };

    /// Classifies a terminal size; the largest class that fits wins.
    pub fn classify(&self, width: u16, height: u16) -> Result<SizeClass, ClockError> {
        let fits = |(min_w, min_h): (u16, u16)| width >= min_w && height >= min_h;

        if fits(self.large) {
            Ok(SizeClass::Large)
        } else if fits(self.medium) {
            Ok(SizeClass::Medium)
        } else if fits(self.small) {
            Ok(SizeClass::Small)
        } else {
            Err(ClockError::TerminalTooSmall { width, height })
        }
    }
}

/// Last known terminal dimensions and the size class derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalState {
    pub width: u16,
    pub height: u16,
    pub size: SizeClass,
    thresholds: Thresholds,
}

impl TerminalState {
    /// Classifies the initial terminal size.
    pub fn new(thresholds: Thresholds, width: u16, height: u16) -> Result<Self, ClockError> {
        Ok(Self {
            width,
            height,
            size: thresholds.classify(width, height)?,
            thresholds,
        })
    }

    /// Re-derives the size class if the dimensions changed.
    ///
    /// Returns `Ok(true)` when a resize happened and the screen must be redrawn.
    pub fn update(&mut self, width: u16, height: u16) -> Result<bool, ClockError> {
        if (width, height) == (self.width, self.height) {
            return Ok(false);
        }
        self.size = self.thresholds.classify(width, height)?;
        self.width = width;
        self.height = height;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(width: u16, height: u16) -> Result<SizeClass, ClockError> {
        Thresholds::CLOCK.classify(width, height)
    }

    #[test]
    fn test_large_boundary() {
        assert_eq!(classify(90, 20), Ok(SizeClass::Large));
        assert_eq!(classify(200, 60), Ok(SizeClass::Large));
        assert_eq!(classify(89, 20), Ok(SizeClass::Medium));
        assert_eq!(classify(90, 19), Ok(SizeClass::Medium));
    }

    #[test]
    fn test_medium_boundary() {
        assert_eq!(classify(46, 10), Ok(SizeClass::Medium));
        assert_eq!(classify(45, 10), Ok(SizeClass::Small));
        assert_eq!(classify(46, 9), Ok(SizeClass::Small));
    }

    #[test]
    fn test_small_boundary() {
        assert_eq!(classify(36, 8), Ok(SizeClass::Small));
        assert_eq!(
            classify(35, 8),
            Err(ClockError::TerminalTooSmall {
                width: 35,
                height: 8
            })
        );
        assert!(classify(36, 7).is_err());
        assert!(classify(0, 0).is_err());
    }

    #[test]
    fn test_wide_but_short_terminal_uses_height() {
        assert_eq!(classify(300, 8), Ok(SizeClass::Small));
    }

    #[test]
    fn test_stopwatch_needs_more_rows() {
        let t = Thresholds::STOPWATCH;
        assert_eq!(t.classify(90, 22), Ok(SizeClass::Large));
        assert_eq!(t.classify(90, 21), Ok(SizeClass::Medium));
        assert_eq!(t.classify(46, 11), Ok(SizeClass::Small));
        assert!(t.classify(36, 8).is_err());
    }

    #[test]
    fn test_terminal_state_update() {
        let mut state = TerminalState::new(Thresholds::CLOCK, 100, 30).unwrap();
        assert_eq!(state.size, SizeClass::Large);

        assert_eq!(state.update(100, 30), Ok(false));
        assert_eq!(state.update(50, 12), Ok(true));
        assert_eq!(state.size, SizeClass::Medium);
        assert_eq!((state.width, state.height), (50, 12));

        assert!(state.update(20, 5).is_err());
    }
}
