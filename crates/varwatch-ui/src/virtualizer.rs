//! Which list rows exist, and where the scrollbar thumb sits.
//!
//! The thumb position is the source of truth; the first visible row is
//! derived from it on every pass.

pub const ROW_HEIGHT: f32 = 20.0;
/// Top of the first row, and the top of the thumb's travel.
pub const ROW_TOP: f32 = 23.0;
pub const PADDING: f32 = 6.0;
pub const THUMB_WIDTH: f32 = 7.0;
pub const THUMB_HEIGHT: f32 = 30.0;
/// Lists never shrink below this in either direction.
pub const MIN_LIST_SIZE: f32 = 100.0;
pub const DEFAULT_LIST_WIDTH: f32 = 100.0;
pub const DEFAULT_LIST_HEIGHT: f32 = 120.0;

pub fn visible_rows(height: f32) -> usize {
    ((height - ROW_HEIGHT) / ROW_HEIGHT).floor().max(0.0) as usize
}

/// Top and bottom of the thumb's travel.
pub fn thumb_travel(height: f32) -> (f32, f32) {
    (ROW_TOP, (height - 40.0).max(ROW_TOP))
}

pub fn clamp_thumb(y: f32, height: f32) -> f32 {
    let (top, bottom) = thumb_travel(height);
    y.clamp(top, bottom)
}

/// Width of a row's value box. An overflowing list gives up ten more pixels
/// to the scrollbar.
pub fn cell_width(width: f32, overflow: bool) -> f32 {
    width - 2.0 * PADDING - if overflow { 30.0 } else { 20.0 } - PADDING
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListWindow {
    pub offset: usize,
    pub visible: usize,
    pub overflow: bool,
    /// Thumb position after clamping to the current height.
    pub thumb_y: f32,
}

impl ListWindow {
    pub fn compute(len: usize, height: f32, thumb_y: f32) -> Self {
        let visible = visible_rows(height);
        let overflow = len > visible;
        let thumb_y = clamp_thumb(thumb_y, height);
        let max_offset = len.saturating_sub(visible);
        let offset = if overflow {
            let (top, bottom) = thumb_travel(height);
            let travel = bottom - top;
            if travel > 0.0 {
                let ratio = (thumb_y - top) / travel;
                ((ratio * max_offset as f32).floor().max(0.0) as usize).min(max_offset)
            } else {
                0
            }
        } else {
            0
        };
        Self {
            offset,
            visible,
            overflow,
            thumb_y,
        }
    }

    /// Item indices to materialize.
    pub fn rows(&self, len: usize) -> std::ops::Range<usize> {
        let end = (self.offset + self.visible).min(len);
        self.offset.min(end)..end
    }

    pub fn row_y(&self, index: usize) -> f32 {
        (index - self.offset) as f32 * ROW_HEIGHT + ROW_TOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_six_rows_at_height_140() {
        assert_eq!(visible_rows(140.0), 6);
        let top = ListWindow::compute(10, 140.0, ROW_TOP);
        assert!(top.overflow);
        assert_eq!(top.offset, 0);
        assert_eq!(top.rows(10), 0..6);

        let bottom = ListWindow::compute(10, 140.0, 100.0);
        assert_eq!(bottom.offset, 4);
        assert_eq!(bottom.rows(10), 4..10);
        assert_eq!(bottom.row_y(4), ROW_TOP);
        assert_eq!(bottom.row_y(9), ROW_TOP + 100.0);
    }

    #[test]
    fn test_no_overflow_pins_offset() {
        let w = ListWindow::compute(3, 140.0, 90.0);
        assert!(!w.overflow);
        assert_eq!(w.offset, 0);
        assert_eq!(w.rows(3), 0..3);
        assert_eq!(cell_width(100.0, false), 62.0);
        assert_eq!(cell_width(100.0, true), 52.0);
    }

    #[test]
    fn test_thumb_clamps_after_shrink() {
        let w = ListWindow::compute(50, 100.0, 500.0);
        assert_eq!(w.thumb_y, 60.0);
        assert_eq!(w.offset, 50 - visible_rows(100.0));
    }

    proptest! {
        #[test]
        fn prop_offset_in_range(
            len in 0usize..300,
            height in 100.0f32..600.0,
            drags in proptest::collection::vec(-2000.0f32..2000.0, 1..30),
        ) {
            let mut thumb = ROW_TOP;
            for d in drags {
                let w = ListWindow::compute(len, height, thumb + d);
                thumb = w.thumb_y;
                prop_assert!(w.offset <= len.saturating_sub(w.visible));
                let (top, bottom) = thumb_travel(height);
                prop_assert!(thumb >= top && thumb <= bottom);
                prop_assert!(w.rows(len).len() <= w.visible);
            }
        }
    }
}
