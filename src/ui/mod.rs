//! UI rendering module.
//!
//! The clock face is painted onto a [`Surface`]; in production that is the
//! Ratatui frame buffer, in tests an in-memory buffer.

pub mod colors;
mod face;
pub mod help;
mod surface;

use ratatui::Frame;

pub use face::{render, Scene};

/// Main draw function - paints the scene over the whole frame.
pub fn draw(frame: &mut Frame, scene: &Scene<'_>) {
    render(frame.buffer_mut(), scene);
}
