//! Clock geometry: digit pitch, bounding boxes and centering.

use crate::resize::SizeClass;

/// Horizontal pitch between successive digit slots.
pub fn offset_for(size: SizeClass) -> i32 {
    match size {
        SizeClass::Small => 5,
        SizeClass::Medium => 6,
        SizeClass::Large => 14,
    }
}

/// Returns the `(height, width)` of a full clock face.
pub fn bounding_box(size: SizeClass, show_seconds: bool) -> (i32, i32) {
    match (size, show_seconds) {
        (SizeClass::Small, false) => (5, 20),
        (SizeClass::Small, true) => (5, 30),
        (SizeClass::Medium, false) => (7, 24),
        (SizeClass::Medium, true) => (7, 36),
        (SizeClass::Large, false) => (18, 56),
        (SizeClass::Large, true) => (18, 84),
    }
}

/// Returns the `(row, col)` of the top-left corner that centers the clock face
/// in a `width` x `height` terminal.
pub fn centered_origin(size: SizeClass, show_seconds: bool, width: u16, height: u16) -> (i32, i32) {
    let (box_height, box_width) = bounding_box(size, show_seconds);
    (
        (i32::from(height) - box_height).div_euclid(2),
        (i32::from(width) - box_width).div_euclid(2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(offset_for(SizeClass::Small), 5);
        assert_eq!(offset_for(SizeClass::Medium), 6);
        assert_eq!(offset_for(SizeClass::Large), 14);
    }

    #[test]
    fn test_bounding_boxes() {
        assert_eq!(bounding_box(SizeClass::Small, false), (5, 20));
        assert_eq!(bounding_box(SizeClass::Small, true), (5, 30));
        assert_eq!(bounding_box(SizeClass::Medium, false), (7, 24));
        assert_eq!(bounding_box(SizeClass::Medium, true), (7, 36));
        assert_eq!(bounding_box(SizeClass::Large, false), (18, 56));
        assert_eq!(bounding_box(SizeClass::Large, true), (18, 84));
    }

    #[test]
    fn test_centering_floors() {
        // (25 - 18) / 2 = 3, (101 - 84) / 2 = 8
        assert_eq!(centered_origin(SizeClass::Large, true, 101, 25), (3, 8));
        assert_eq!(centered_origin(SizeClass::Small, false, 36, 8), (1, 8));
    }
}
