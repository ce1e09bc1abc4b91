//! Paints the seven-segment clock face.

use crate::constants::text;
use crate::glyph::glyph_for;
use crate::layout::{bounding_box, centered_origin, offset_for};
use crate::resize::SizeClass;
use crate::stopwatch::StopwatchState;

use super::colors::{ClockColor, ColorPair};
use super::surface::Surface;

/// Everything needed to paint one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Six digits: hours, minutes, seconds
    pub digits: &'a str,
    pub size: SizeClass,
    pub color: ClockColor,
    pub background: ClockColor,
    pub show_seconds: bool,
    pub colon_visible: bool,
    pub military_time: bool,
    /// `AM`/`PM`, empty for none
    pub am_pm: &'a str,
    pub date: Option<&'a str>,
    /// Paint real digit characters and the diagnostic overlay
    pub test_mode: bool,
    /// Set when painting the stopwatch
    pub stopwatch: Option<StopwatchState>,
}

/// Paints `scene` centered on `surface`.
pub fn render<S: Surface>(surface: &mut S, scene: &Scene<'_>) {
    let (width, height) = surface.size();
    let solid = ColorPair::solid(scene.color);
    let accent = ColorPair::accent(scene.color, scene.background);

    let pitch = offset_for(scene.size);
    let (box_height, _) = bounding_box(scene.size, scene.show_seconds);
    let (top, mut left) = centered_origin(scene.size, scene.show_seconds, width, height);

    surface.clear();
    fill_background(surface, scene.background);

    if let Some(state) = scene.stopwatch {
        let msg = format!("Stop Watch  {state}");
        surface.plot(
            top - text::STOPWATCH_LINE_RISE,
            i32::from(width) / 2 - text::STOPWATCH_LINE_SHIFT,
            &msg,
            accent,
        );
    }

    let digits: Vec<char> = scene.digits.chars().collect();
    debug_assert_eq!(digits.len(), 6, "expected six digits, got {:?}", scene.digits);
    let face = Face {
        top,
        size: scene.size,
        pair: solid,
        test_mode: scene.test_mode,
    };

    // A 12 hour clock never shows a leading zero.
    if scene.military_time || digits.first() == Some(&'1') {
        face.digit(surface, &digits, 0, left);
    }
    left += pitch;
    face.digit(surface, &digits, 1, left);
    if scene.colon_visible {
        face.colon(surface, left);
    }
    left += pitch + 1;
    face.digit(surface, &digits, 2, left);
    left += pitch;
    face.digit(surface, &digits, 3, left);

    if scene.show_seconds {
        if scene.colon_visible {
            face.colon(surface, left);
        }
        left += pitch + 1;
        face.digit(surface, &digits, 4, left);
        left += pitch;
        face.digit(surface, &digits, 5, left);
    }
    left += pitch;

    let text_row = top + box_height;
    if !scene.am_pm.is_empty() {
        surface.plot(text_row, left, scene.am_pm, accent);
    }
    if let Some(date) = scene.date {
        surface.plot(text_row, left - text::DATE_LEFT_SHIFT, date, accent);
    }

    if scene.test_mode {
        surface.plot(0, 0, "test mode", accent);
        surface.plot(1, 0, scene.color.name(), accent);
        surface.plot(2, 0, &format!("bg={}", scene.background), accent);
    }
}

/// Fills every row but the last with the background color.
fn fill_background<S: Surface>(surface: &mut S, background: ClockColor) {
    let (width, height) = surface.size();
    let blank = " ".repeat(usize::from(width));
    let pair = ColorPair::solid(background);
    for row in 0..i32::from(height) - 1 {
        surface.plot(row, 0, &blank, pair);
    }
}

/// Placement shared by every glyph in one frame.
struct Face {
    top: i32,
    size: SizeClass,
    pair: ColorPair,
    test_mode: bool,
}

impl Face {
    /// Paints digit slot `slot` with its left edge at column `left`.
    ///
    /// The cells are solid blocks, so the character underneath is invisible;
    /// outside test mode it is the slot's 1-based position.
    fn digit<S: Surface>(&self, surface: &mut S, digits: &[char], slot: usize, left: i32) {
        let Some(&ch) = digits.get(slot) else {
            return;
        };
        let label = if self.test_mode {
            ch
        } else {
            char::from(b'1' + slot as u8)
        };
        self.paint(surface, ch, label, left);
    }

    fn colon<S: Surface>(&self, surface: &mut S, left: i32) {
        self.paint(surface, ':', ':', left);
    }

    fn paint<S: Surface>(&self, surface: &mut S, glyph: char, label: char, left: i32) {
        let mut buf = [0u8; 4];
        let label = label.encode_utf8(&mut buf);
        for (row, col) in glyph_for(glyph, self.size) {
            surface.plot(self.top + i32::from(row), left + i32::from(col), label, self.pair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use std::collections::BTreeSet;

    fn scene(digits: &str) -> Scene<'_> {
        Scene {
            digits,
            size: SizeClass::Large,
            color: ClockColor::White,
            background: ClockColor::Black,
            show_seconds: true,
            colon_visible: true,
            military_time: false,
            am_pm: "PM",
            date: None,
            test_mode: true,
            stopwatch: None,
        }
    }

    fn paint(scene: &Scene<'_>, width: u16, height: u16) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        render(&mut buf, scene);
        buf
    }

    fn screen_text(buf: &Buffer) -> String {
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    fn digits_on_screen(buf: &Buffer) -> BTreeSet<char> {
        screen_text(buf).chars().filter(char::is_ascii_digit).collect()
    }

    fn row_text(buf: &Buffer, row: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, row)].symbol()).collect()
    }

    #[test]
    fn test_every_digit_of_the_time_is_painted() {
        let buf = paint(&scene("123456"), 100, 30);
        assert_eq!(digits_on_screen(&buf), BTreeSet::from(['1', '2', '3', '4', '5', '6']));
    }

    #[test]
    fn test_leading_zero_hidden_in_twelve_hour_time() {
        let buf = paint(&scene("020000"), 100, 30);
        // Large: top = (30 - 18) / 2, left = (100 - 84) / 2
        let (top, left): (u16, u16) = (6, 8);
        assert_eq!(buf[(left, top)].symbol(), " ");
        assert_eq!(buf[(left + 14, top)].symbol(), "2");
        assert_eq!(digits_on_screen(&buf), BTreeSet::from(['0', '2']));
        assert!(screen_text(&buf).contains("PM"));
    }

    #[test]
    fn test_leading_zero_shown_in_military_time() {
        let mut s = scene("080000");
        s.military_time = true;
        s.am_pm = "";
        let buf = paint(&s, 100, 30);
        assert_eq!(buf[(8, 6)].symbol(), "0");
        assert_eq!(digits_on_screen(&buf), BTreeSet::from(['0', '8']));
        assert!(!screen_text(&buf).contains('M'));
    }

    #[test]
    fn test_leading_one_shown_in_twelve_hour_time() {
        let buf = paint(&scene("113000"), 100, 30);
        // '1' lights only the right-hand segments
        assert_eq!(buf[(8 + 8, 6)].symbol(), "1");
    }

    #[test]
    fn test_no_seconds_drops_last_two_digits() {
        let mut s = scene("123456");
        s.show_seconds = false;
        let buf = paint(&s, 100, 30);
        assert_eq!(digits_on_screen(&buf), BTreeSet::from(['1', '2', '3', '4']));
    }

    #[test]
    fn test_colon_follows_visibility() {
        let buf = paint(&scene("123456"), 100, 30);
        assert_eq!(screen_text(&buf).matches(':').count(), 4);

        let mut s = scene("123456");
        s.colon_visible = false;
        let buf = paint(&s, 100, 30);
        assert!(!screen_text(&buf).contains(':'));

        s.colon_visible = true;
        s.show_seconds = false;
        let buf = paint(&s, 100, 30);
        assert_eq!(screen_text(&buf).matches(':').count(), 2);
    }

    #[test]
    fn test_date_and_marker_below_digits() {
        let mut s = scene("123456");
        s.date = Some("02/01/1970");
        let buf = paint(&s, 100, 30);
        let row = row_text(&buf, 6 + 18);
        assert!(row.contains("PM"));
        assert!(row.contains("02/01/1970"));
        assert!(row.find("02/01/1970") < row.find("PM"));
    }

    #[test]
    fn test_small_layout_positions() {
        let mut s = scene("123456");
        s.size = SizeClass::Small;
        let buf = paint(&s, 36, 8);
        // top = 1, left = 3; final anchor = 3 + 5 + 6 + 5 + 6 + 5 + 5 = 35
        assert_eq!(buf[(35, 6)].symbol(), "P");
        // Slot 0 is a '1': right column of the small glyph
        assert_eq!(buf[(5, 1)].symbol(), "1");
    }

    #[test]
    fn test_background_fill_skips_last_row() {
        let mut s = scene("123456");
        s.test_mode = false;
        s.background = ClockColor::Blue;
        let buf = paint(&s, 100, 30);
        assert_eq!(buf[(99, 0)].bg, Color::Blue);
        assert_eq!(buf[(99, 28)].bg, Color::Blue);
        assert_eq!(buf[(99, 29)].bg, Color::Reset);
    }

    #[test]
    fn test_digits_are_solid_blocks() {
        let mut s = scene("888888");
        s.color = ClockColor::Green;
        s.military_time = true;
        let buf = paint(&s, 100, 30);
        // Slot 0 and slot 1 top bars
        for x in [8, 22] {
            let cell = &buf[(x, 6)];
            assert_eq!(cell.fg, Color::Green);
            assert_eq!(cell.bg, Color::Green);
        }
    }

    #[test]
    fn test_twelve_hour_leading_eight_stays_blank() {
        let mut s = scene("888888");
        s.color = ClockColor::Green;
        s.military_time = false;
        let buf = paint(&s, 100, 30);
        assert_eq!(buf[(8, 6)].bg, Color::Black);
        assert_eq!(buf[(22, 6)].bg, Color::Green);
    }

    #[test]
    fn test_position_labels_outside_test_mode() {
        let mut s = scene("000000");
        s.military_time = true;
        s.test_mode = false;
        let buf = paint(&s, 100, 30);
        assert_eq!(
            digits_on_screen(&buf),
            BTreeSet::from(['1', '2', '3', '4', '5', '6'])
        );
        assert!(!screen_text(&buf).contains("test mode"));
    }

    #[test]
    fn test_overlay_in_test_mode() {
        let mut s = scene("123456");
        s.color = ClockColor::Cyan;
        s.background = ClockColor::Red;
        let buf = paint(&s, 100, 30);
        assert!(row_text(&buf, 0).starts_with("test mode"));
        assert!(row_text(&buf, 1).starts_with("cyan"));
        assert!(row_text(&buf, 2).starts_with("bg=red"));
    }

    #[test]
    fn test_stopwatch_state_line() {
        let mut s = scene("000000");
        s.military_time = true;
        s.am_pm = "";
        s.test_mode = false;
        s.stopwatch = Some(StopwatchState::Paused);
        let buf = paint(&s, 100, 30);
        // two rows above top = 6, starting at 100 / 2 - 10
        assert!(row_text(&buf, 4)[40..].starts_with("Stop Watch  Paused"));
    }

    #[test]
    fn test_tiny_surface_does_not_panic() {
        let buf = paint(&scene("123456"), 10, 4);
        assert_eq!(buf.area.width, 10);
    }
}
