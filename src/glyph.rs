//! Seven-segment glyph tables.
//!
//! Every digit is drawn as the union of up to seven segments; the colon is two
//! isolated cells. Coordinates are `(row, col)` offsets from the top-left cell
//! of the digit slot. Neighbouring segments share their corner cells, so a
//! glyph may list the same cell twice.

use crate::resize::SizeClass;

/// A `(row, col)` offset within a digit slot.
pub type Offset = (u8, u8);

/// The segment layout for one size class.
///
/// ```text
///   -1-
///  6   2
///   -7-
///  5   3
///   -4-
/// ```
#[derive(Debug)]
pub struct Segments {
    pub seg1: &'static [Offset],
    pub seg2: &'static [Offset],
    pub seg3: &'static [Offset],
    pub seg4: &'static [Offset],
    pub seg5: &'static [Offset],
    pub seg6: &'static [Offset],
    pub seg7: &'static [Offset],
    pub colon: &'static [Offset],
}

impl Segments {
    /// Returns the cells of segment `n` (1-based).
    ///
    /// Segments run 1 to 7; anything else panics in debug builds and draws
    /// nothing in release builds.
    fn segment(&self, n: u8) -> &'static [Offset] {
        match n {
            1 => self.seg1,
            2 => self.seg2,
            3 => self.seg3,
            4 => self.seg4,
            5 => self.seg5,
            6 => self.seg6,
            7 => self.seg7,
            _ => {
                debug_assert!(false, "no segment {n}");
                &[]
            }
        }
    }
}

pub const SMALL: Segments = Segments {
    seg1: &[(0, 0), (0, 1), (0, 2)],
    seg2: &[(0, 2), (1, 2), (2, 2)],
    seg3: &[(2, 2), (3, 2), (4, 2)],
    seg4: &[(4, 0), (4, 1), (4, 2)],
    seg5: &[(2, 0), (3, 0), (4, 0)],
    seg6: &[(0, 0), (1, 0), (2, 0)],
    seg7: &[(2, 0), (2, 1), (2, 2)],
    colon: &[(1, 4), (3, 4)],
};

pub const MEDIUM: Segments = Segments {
    seg1: &[(0, 0), (0, 1), (0, 2), (0, 3)],
    seg2: &[(0, 3), (1, 3), (2, 3), (3, 3)],
    seg3: &[(3, 3), (4, 3), (5, 3), (6, 3)],
    seg4: &[(6, 0), (6, 1), (6, 2), (6, 3)],
    seg5: &[(3, 0), (4, 0), (5, 0), (6, 0)],
    seg6: &[(0, 0), (1, 0), (2, 0), (3, 0)],
    seg7: &[(3, 0), (3, 1), (3, 2), (3, 3)],
    colon: &[(2, 5), (4, 5)],
};

// Large segments are two cells thick.
const LARGE_SEG1: &[Offset] = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (0, 9), (1, 0),
    (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7), (1, 8), (1, 9),
];

const LARGE_SEG2: &[Offset] = &[
    (0, 8), (1, 8), (2, 8), (3, 8), (4, 8), (5, 8), (6, 8), (7, 8), (8, 8), (9, 8), (0, 9),
    (1, 9), (2, 9), (3, 9), (4, 9), (5, 9), (6, 9), (7, 9), (8, 9), (9, 9),
];

const LARGE_SEG3: &[Offset] = &[
    (8, 8), (9, 8), (10, 8), (11, 8), (12, 8), (13, 8), (14, 8), (15, 8), (16, 8), (17, 8),
    (8, 9), (9, 9), (10, 9), (11, 9), (12, 9), (13, 9), (14, 9), (15, 9), (16, 9), (17, 9),
];

const LARGE_SEG4: &[Offset] = &[
    (16, 0), (16, 1), (16, 2), (16, 3), (16, 4), (16, 5), (16, 6), (16, 7), (16, 8), (16, 9),
    (17, 0), (17, 1), (17, 2), (17, 3), (17, 4), (17, 5), (17, 6), (17, 7), (17, 8), (17, 9),
];

const LARGE_SEG5: &[Offset] = &[
    (8, 0), (9, 0), (10, 0), (11, 0), (12, 0), (13, 0), (14, 0), (15, 0), (16, 0), (17, 0),
    (8, 1), (9, 1), (10, 1), (11, 1), (12, 1), (13, 1), (14, 1), (15, 1), (16, 1), (17, 1),
];

const LARGE_SEG6: &[Offset] = &[
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (8, 0), (9, 0), (0, 1),
    (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1), (8, 1), (9, 1),
];

const LARGE_SEG7: &[Offset] = &[
    (8, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5), (8, 6), (8, 7), (8, 8), (8, 9), (9, 0),
    (9, 1), (9, 2), (9, 3), (9, 4), (9, 5), (9, 6), (9, 7), (9, 8), (9, 9),
];

pub const LARGE: Segments = Segments {
    seg1: LARGE_SEG1,
    seg2: LARGE_SEG2,
    seg3: LARGE_SEG3,
    seg4: LARGE_SEG4,
    seg5: LARGE_SEG5,
    seg6: LARGE_SEG6,
    seg7: LARGE_SEG7,
    colon: &[(5, 12), (12, 12)],
};

/// Segments lit for each digit, in drawing order.
const DIGIT_SEGMENTS: [&[u8]; 10] = [
    &[1, 2, 3, 4, 5, 6],
    &[2, 3],
    &[1, 2, 7, 5, 4],
    &[1, 2, 7, 3, 4],
    &[6, 7, 2, 3],
    &[1, 6, 7, 3, 4],
    &[6, 5, 4, 3, 7],
    &[1, 2, 3],
    &[1, 2, 3, 4, 5, 6, 7],
    &[1, 2, 3, 4, 6, 7],
];

/// Returns the segment table for a size class.
pub fn segments_for(size: SizeClass) -> &'static Segments {
    match size {
        SizeClass::Small => &SMALL,
        SizeClass::Medium => &MEDIUM,
        SizeClass::Large => &LARGE,
    }
}

/// Returns the cells that draw `ch` (`'0'..='9'` or `':'`) at `size`.
///
/// Any other character is a caller bug: debug builds panic, release builds
/// draw nothing.
pub fn glyph_for(ch: char, size: SizeClass) -> Vec<Offset> {
    let segments = segments_for(size);
    if ch == ':' {
        return segments.colon.to_vec();
    }
    let Some(digit) = ch.to_digit(10) else {
        debug_assert!(false, "no glyph for {ch:?}");
        return Vec::new();
    };
    DIGIT_SEGMENTS[digit as usize]
        .iter()
        .flat_map(|&n| segments.segment(n).iter().copied())
        .collect()
}
