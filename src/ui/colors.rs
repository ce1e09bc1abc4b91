//! Color definitions for the clock face.
//!
//! The clock only ever uses the eight basic terminal colors; digits are drawn
//! with a solid pair (foreground equal to background) so they read as blocks.

use std::fmt;

use clap::ValueEnum;
use ratatui::style::{Color, Style};

/// One of the eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClockColor {
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    White,
    Black,
}

impl ClockColor {
    /// Colors visited by cycling mode, in order. Black is never cycled to.
    pub const CYCLE: [ClockColor; 7] = [
        ClockColor::Red,
        ClockColor::Green,
        ClockColor::Blue,
        ClockColor::Yellow,
        ClockColor::Magenta,
        ClockColor::Cyan,
        ClockColor::White,
    ];

    /// Lowercase name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ClockColor::Red => "red",
            ClockColor::Green => "green",
            ClockColor::Blue => "blue",
            ClockColor::Yellow => "yellow",
            ClockColor::Magenta => "magenta",
            ClockColor::Cyan => "cyan",
            ClockColor::White => "white",
            ClockColor::Black => "black",
        }
    }
}

impl fmt::Display for ClockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ClockColor> for Color {
    fn from(color: ClockColor) -> Self {
        match color {
            ClockColor::Red => Color::Red,
            ClockColor::Green => Color::Green,
            ClockColor::Blue => Color::Blue,
            ClockColor::Yellow => Color::Yellow,
            ClockColor::Magenta => Color::Magenta,
            ClockColor::Cyan => Color::Cyan,
            ClockColor::White => Color::White,
            ClockColor::Black => Color::Black,
        }
    }
}

/// Foreground/background pair for a painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: ClockColor,
    pub bg: ClockColor,
}

impl ColorPair {
    /// Both halves the same color: the solid block look of the digits.
    pub fn solid(color: ClockColor) -> Self {
        Self {
            fg: color,
            bg: color,
        }
    }

    /// Text in `fg` over the clock background.
    pub fn accent(fg: ClockColor, bg: ClockColor) -> Self {
        Self { fg, bg }
    }
}

impl From<ColorPair> for Style {
    fn from(pair: ColorPair) -> Self {
        Style::default().fg(pair.fg.into()).bg(pair.bg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_excludes_black() {
        assert!(!ClockColor::CYCLE.contains(&ClockColor::Black));
        assert_eq!(ClockColor::CYCLE[0], ClockColor::Red);
        assert_eq!(ClockColor::CYCLE[6], ClockColor::White);
    }

    #[test]
    fn test_names_parse_back_case_insensitively() {
        for color in ClockColor::value_variants() {
            let upper = color.name().to_uppercase();
            assert_eq!(ClockColor::from_str(&upper, true), Ok(*color));
        }
        assert!(ClockColor::from_str("purple", true).is_err());
    }

    #[test]
    fn test_pair_to_style() {
        let style: Style = ColorPair::accent(ClockColor::Red, ClockColor::Black).into();
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(style.bg, Some(Color::Black));
    }
}
