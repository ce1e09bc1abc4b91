//! Command line arguments.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::clock::{parse_test_date, parse_test_time};
use crate::options::{ColorMode, CycleTiming, DisplayOptions};
use crate::ui::colors::ClockColor;

#[derive(Debug, Parser)]
#[command(name = "ct-clock")]
#[command(about = "A large seven-segment digital clock for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Digit color
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = ClockColor::White)]
    pub color: ClockColor,

    /// Do not show seconds
    #[arg(short = 's', long = "no_seconds")]
    pub no_seconds: bool,

    /// Military time (24 hour clock)
    #[arg(short, long = "military_time")]
    pub military_time: bool,

    /// Screen saver mode. Any key will exit
    #[arg(short = 'S', long)]
    pub screensaver: bool,

    /// Blinking colon
    #[arg(short, long = "blink_colon")]
    pub blink_colon: bool,

    /// No colon
    #[arg(short, long = "no_colon")]
    pub no_colon: bool,

    /// Mode: 0-normal, 1-cycle colors
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    pub mode: u8,

    /// Cycle timing (1 every sec, 2 every min, 3 every hour)
    #[arg(long = "cycle_timing", default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub cycle_timing: u8,

    /// Show date
    #[arg(long = "show_date")]
    pub show_date: bool,

    /// Background color
    #[arg(long = "bg_color", value_enum, ignore_case = true, default_value_t = ClockColor::Black)]
    pub bg_color: ClockColor,

    /// List commands available during run time
    #[arg(long = "list_commands")]
    pub list_commands: bool,

    /// Write logs to this file
    #[arg(long = "log_file")]
    pub log_file: Option<PathBuf>,

    /// Log level for --log_file (off, error, warn, info, debug, trace)
    #[arg(long = "log_level", default_value = "info", value_parser = log_level)]
    pub log_level: LevelFilter,

    #[arg(long = "test_mode", hide = true)]
    pub test_mode: bool,

    #[arg(long = "test_time", hide = true, default_value = "00:00:00", value_parser = test_time)]
    pub test_time: NaiveTime,

    #[arg(long = "test_date", hide = true, default_value = "1970-1-2", value_parser = test_date)]
    pub test_date: NaiveDate,

    /// Keep the test clock from advancing
    #[arg(long = "test_freeze", hide = true)]
    pub test_freeze: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a manually controlled stop watch
    #[command(name = "stop_watch")]
    StopWatch {
        /// Auto start stop watch
        #[arg(long = "auto_start")]
        auto_start: bool,

        /// Digit color
        #[arg(short, long, value_enum, ignore_case = true, default_value_t = ClockColor::White)]
        color: ClockColor,

        /// List commands available during run time
        #[arg(long = "list_commands")]
        list_commands: bool,
    },
}

impl Cli {
    /// True when either the clock or the stop watch asked for the listing.
    pub fn wants_command_list(&self) -> bool {
        self.list_commands
            || matches!(
                self.command,
                Some(Command::StopWatch {
                    list_commands: true,
                    ..
                })
            )
    }

    /// The display options the clock starts with.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            color: self.color,
            background: self.bg_color,
            show_seconds: !self.no_seconds,
            military_time: self.military_time,
            show_date: self.show_date,
            blink_colon: self.blink_colon,
            colon_visible: !self.no_colon,
            color_mode: if self.mode == 1 {
                ColorMode::Cycling
            } else {
                ColorMode::Static
            },
            cycle_timing: CycleTiming::from_number(self.cycle_timing)
                .unwrap_or(CycleTiming::PerMinute),
            ..DisplayOptions::default()
        }
    }
}

fn test_time(s: &str) -> Result<NaiveTime, String> {
    parse_test_time(s).map_err(|e| e.to_string())
}

fn log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level '{s}', expected off, error, warn, info, debug or trace"))
}

fn test_date(s: &str) -> Result<NaiveDate, String> {
    parse_test_date(s).map_err(|e| e.to_string())
}
