//! Viewport and scroll-offset arithmetic.
//!
//! A `Viewport` owns exactly one number of consequence — the scroll offset
//! — and turns it, together with the total expression height and the
//! available rows, into the inclusive range of absolute visual rows that
//! should be painted. It has no idea what a buffer or a cursor is; callers
//! hand it the cursor's *visual* row (already folded through `edit-text`'s
//! wrap arithmetic) and get back whether the offset needed to move to keep
//! that row in view.

use edit_text::AbsoluteVisualRow;

/// The inclusive range `[start, end]` of absolute visual rows currently
/// visible. `end < start` only when `total_height == 0`, which does not
/// happen for a buffer that always has at least one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    pub start: AbsoluteVisualRow,
    pub end: AbsoluteVisualRow,
}

impl ViewRange {
    pub fn contains(&self, row: AbsoluteVisualRow) -> bool {
        row.0 >= self.start.0 && row.0 <= self.end.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    scroll_offset: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    fn max_offset(total_height: usize, viewport_height: usize) -> usize {
        total_height.saturating_sub(viewport_height)
    }

    /// Clamp the stored offset into `[0, max(0, H_exp - H_vp)]` and return
    /// the clamped value actually in effect.
    pub fn clamp(&mut self, total_height: usize, viewport_height: usize) -> usize {
        let max_offset = Self::max_offset(total_height, viewport_height);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }
        self.scroll_offset
    }

    /// The bottom-anchored visible window, given the current offset.
    pub fn range(&mut self, total_height: usize, viewport_height: usize) -> ViewRange {
        let max_offset = Self::max_offset(total_height, viewport_height);
        let clamped = self.clamp(total_height, viewport_height);
        let start = max_offset - clamped;
        let end = total_height.saturating_sub(1).saturating_sub(clamped);
        ViewRange {
            start: AbsoluteVisualRow(start),
            end: AbsoluteVisualRow(end.max(start)),
        }
    }

    /// Recompute the offset so `cursor_row` stays inside the current
    /// viewport. `y_shift` lets the caller account for a pending
    /// single-row move before the cursor's own
    /// cache has been updated (used while restoring the real cursor during
    /// render). Returns whether the offset changed.
    pub fn update_scroll_offset(
        &mut self,
        cursor_row: AbsoluteVisualRow,
        total_height: usize,
        viewport_height: usize,
        y_shift: isize,
    ) -> bool {
        let shifted = (cursor_row.0 as isize + y_shift).max(0) as usize;
        let before = self.scroll_offset;
        let range = self.range(total_height, viewport_height);

        if shifted < range.start.0 {
            let shortfall = range.start.0 - shifted;
            self.scroll_offset = self.scroll_offset.saturating_add(shortfall);
        } else if shifted > range.end.0 {
            let shortfall = shifted - range.end.0;
            self.scroll_offset = self.scroll_offset.saturating_sub(shortfall);
        }
        self.clamp(total_height, viewport_height);
        self.scroll_offset != before
    }

    pub fn scroll_up(&mut self, rows: usize, total_height: usize, viewport_height: usize) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
        self.clamp(total_height, viewport_height);
        self.scroll_offset != before
    }

    pub fn scroll_down(&mut self, rows: usize, total_height: usize, viewport_height: usize) -> bool {
        let before = self.scroll_offset;
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
        self.clamp(total_height, viewport_height);
        self.scroll_offset != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Total height 2, viewport height 1: offset clamps to 1, only the
    /// continuation row (absolute row 1) is visible.
    #[test]
    fn clamps_offset_and_shows_continuation_row() {
        let mut vp = Viewport::new();
        let range = vp.range(2, 1);
        assert_eq!(vp.scroll_offset(), 0);
        assert_eq!(range.start, AbsoluteVisualRow(1));
        assert_eq!(range.end, AbsoluteVisualRow(1));
    }

    #[test]
    fn fits_entirely_when_shorter_than_viewport() {
        let mut vp = Viewport::new();
        let range = vp.range(3, 10);
        assert_eq!(range.start, AbsoluteVisualRow(0));
        assert_eq!(range.end, AbsoluteVisualRow(2));
    }

    /// Offset always lands in `[0, max(0, H_exp - H_vp)]`.
    #[test]
    fn property_offset_always_in_valid_range() {
        let mut vp = Viewport::new();
        for total in 0..20usize {
            for height in 1..20usize {
                for raw in [0usize, 1, 5, 50] {
                    vp = Viewport { scroll_offset: raw };
                    let clamped = vp.clamp(total, height);
                    let max_offset = total.saturating_sub(height);
                    assert!(clamped <= max_offset, "total={total} height={height} raw={raw}");
                }
            }
        }
    }

    #[test]
    fn scroll_up_then_down_returns_to_bottom_anchor() {
        let mut vp = Viewport::new();
        assert!(vp.scroll_up(3, 10, 4));
        assert_eq!(vp.scroll_offset(), 3);
        assert!(vp.scroll_down(3, 10, 4));
        assert_eq!(vp.scroll_offset(), 0);
        // Already at the floor: no further change.
        assert!(!vp.scroll_down(1, 10, 4));
    }

    #[test]
    fn update_scroll_offset_raises_when_cursor_above_start() {
        let mut vp = Viewport::new();
        vp.scroll_up(2, 10, 4); // start becomes 10-4-2=4
        let changed = vp.update_scroll_offset(AbsoluteVisualRow(2), 10, 4, 0);
        assert!(changed);
        let range = vp.range(10, 4);
        assert!(range.contains(AbsoluteVisualRow(2)));
    }

    #[test]
    fn update_scroll_offset_lowers_when_cursor_below_end() {
        let mut vp = Viewport::new();
        vp.scroll_up(4, 10, 4); // offset pinned at max (6)
        let changed = vp.update_scroll_offset(AbsoluteVisualRow(9), 10, 4, 0);
        assert!(changed);
        let range = vp.range(10, 4);
        assert!(range.contains(AbsoluteVisualRow(9)));
    }
}
