//! Terminal digital clock
//!
//! Draws a large seven-segment clock that updates every second. Single
//! keystrokes change colors, formats and the colon while it runs.
//! Run with: ct-clock [OPTIONS] [stop_watch]

mod app;
mod cli;
mod clock;
mod constants;
mod error;
mod event;
mod glyph;
mod layout;
mod options;
mod resize;
mod stopwatch;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use crate::app::{ClockApp, KeyOutcome, StopwatchApp};
use crate::cli::{Cli, Command};
use crate::clock::{TestClock, TimeSource, WallClock};
use crate::error::ClockError;
use crate::event::{EventHandler, Interrupt};
use crate::ui::colors::ClockColor;
use crate::ui::help::running_commands;

/// Entry point for the application.
///
/// Exits 0 on a normal quit or SIGINT and 1 when the terminal is too small to
/// draw the clock. Usage errors are reported by clap before the terminal is
/// touched.
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    if write_command_list(&cli, &mut stdout).context("Failed to print commands")? {
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&cli)?;
    let interrupt = Interrupt::install().context("Failed to install SIGINT handler")?;

    // Initialize the terminal
    let terminal = ratatui::init();

    let result = match cli.command {
        Some(Command::StopWatch {
            auto_start, color, ..
        }) => run_stopwatch(
            terminal,
            &interrupt,
            color,
            cli.bg_color,
            auto_start,
            cli.test_mode,
        ),
        None => run_clock(terminal, &interrupt, &cli),
    };

    // Restore the terminal to its original state
    ratatui::restore();

    let status = exit_status(result, &mut stdout)?;
    Ok(ExitCode::from(status))
}

/// Writes the interactive command listing if it was asked for.
///
/// Returns true when the run should stop here, before the terminal is touched.
fn write_command_list(cli: &Cli, out: &mut impl Write) -> io::Result<bool> {
    if !cli.wants_command_list() {
        return Ok(false);
    }
    out.write_all(running_commands().as_bytes())?;
    out.flush()?;
    Ok(true)
}

/// Turns the outcome of a run into the process exit status.
///
/// A terminal that is too small is reported on `out` and exits 1; any other
/// error is passed up to `main`.
fn exit_status(result: Result<()>, out: &mut impl Write) -> Result<u8> {
    let Err(err) = result else {
        return Ok(0);
    };
    if let Some(ClockError::TerminalTooSmall { width, height }) = err.downcast_ref::<ClockError>() {
        warn!("terminal {width}x{height} is too small");
        writeln!(out, "{err}").context("Failed to report terminal size")?;
        return Ok(1);
    }
    Err(err)
}

/// Sends log records to `--log_file`, if one was given.
///
/// Without a log file no logger is installed and log macros are no-ops, so
/// nothing ever scribbles over the clock face.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Main clock loop.
///
/// Each pass:
/// 1. Stop if SIGINT arrived
/// 2. Re-check the terminal size
/// 3. Read the clock and repaint if anything changed
/// 4. Wait up to the poll timeout for a key and apply it
fn run_clock(mut terminal: ratatui::DefaultTerminal, interrupt: &Interrupt, cli: &Cli) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = ClockApp::new(
        cli.display_options(),
        size.width,
        size.height,
        cli.screensaver,
        cli.test_mode,
    )?;

    let clock: Box<dyn TimeSource> = if cli.test_mode {
        let start = cli.test_date.and_time(cli.test_time);
        info!("test clock starting at {start}");
        if cli.test_freeze {
            Box::new(TestClock::frozen(start))
        } else {
            Box::new(TestClock::ticking(start))
        }
    } else {
        Box::new(WallClock)
    };

    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        if interrupt.is_raised() {
            info!("interrupted");
            break;
        }

        // Pick up terminal resizes; too small ends the run
        let size = terminal.size().context("Failed to read terminal size")?;
        app.resize(size.width, size.height)?;

        // Draw only when the digits or the options changed
        if app.tick(clock.now()) {
            if let Some(scene) = app.scene() {
                terminal
                    .draw(|frame| ui::draw(frame, &scene))
                    .context("Failed to draw clock")?;
            }
        }

        // Handle key presses
        if let Some(key) = event_handler.next()? {
            if app.handle_key(key) == KeyOutcome::Quit {
                break;
            }
        }
    }

    Ok(())
}

/// Stopwatch loop; same shape as the clock loop with a monotonic time source.
fn run_stopwatch(
    mut terminal: ratatui::DefaultTerminal,
    interrupt: &Interrupt,
    color: ClockColor,
    background: ClockColor,
    auto_start: bool,
    test_mode: bool,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    let mut app = StopwatchApp::new(
        color,
        background,
        size.width,
        size.height,
        auto_start,
        Instant::now(),
    )?;
    app.test_mode = test_mode;

    let event_handler = EventHandler::new();

    loop {
        if interrupt.is_raised() {
            info!("interrupted");
            break;
        }

        let size = terminal.size().context("Failed to read terminal size")?;
        app.resize(size.width, size.height)?;

        // Repaint when the shown elapsed time ticks over
        if app.tick(Instant::now()) {
            let scene = app.scene();
            terminal
                .draw(|frame| ui::draw(frame, &scene))
                .context("Failed to draw stopwatch")?;
        }

        if let Some(key) = event_handler.next()? {
            if app.handle_key(key, Instant::now()) == KeyOutcome::Quit {
                break;
            }
        }
    }

    Ok(())
}
