//! The plotting surface the clock face is painted on.

use ratatui::{buffer::Buffer, layout::Position, style::Style};

use super::colors::ColorPair;

/// A grid of terminal cells.
pub trait Surface {
    /// Returns `(width, height)` in cells.
    fn size(&self) -> (u16, u16);

    /// Blanks every cell.
    fn clear(&mut self);

    /// Writes `text` starting at `(row, col)`. Cells that fall outside the
    /// surface are dropped.
    fn plot(&mut self, row: i32, col: i32, text: &str, pair: ColorPair);
}

impl Surface for Buffer {
    fn size(&self) -> (u16, u16) {
        (self.area.width, self.area.height)
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn plot(&mut self, row: i32, col: i32, text: &str, pair: ColorPair) {
        let Ok(y) = u16::try_from(row) else {
            return;
        };
        let area = self.area;
        let style: Style = pair.into();

        for (ch, x) in text.chars().zip(col..) {
            let Ok(x) = u16::try_from(x) else {
                continue;
            };
            let position = Position::new(area.x.saturating_add(x), area.y.saturating_add(y));
            if let Some(cell) = self.cell_mut(position) {
                cell.set_char(ch).set_style(style);
            }
        }
    }
}
