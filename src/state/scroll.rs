//! Scroll state.
//!
//! The page scrolls by rows: `offset` is the document row at the top of the
//! viewport. The offset lives in a signal so the render effect re-runs when
//! it moves. Bounds are recomputed on resize and relayout; operations clamp
//! and report whether movement actually occurred.

use spark_signals::{signal, Signal};

// =============================================================================
// Constants
// =============================================================================

/// Offset beyond which the page counts as "scrolled" (navbar chrome,
/// reveal logic). Strictly greater-than, re-evaluated on every event.
pub const SCROLL_THRESHOLD: u16 = 50;

/// Scroll amount for arrow keys (rows).
pub const LINE_SCROLL: u16 = 1;

/// Scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Page Up/Down scrolls 90% of the viewport.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// ScrollState
// =============================================================================

#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: Signal<u16>,
    viewport_rows: u16,
    document_height: u16,
}

impl ScrollState {
    pub fn new(viewport_rows: u16) -> Self {
        Self {
            offset: signal(0),
            viewport_rows,
            document_height: 0,
        }
    }

    /// The offset signal, for effect subscriptions.
    pub fn offset_signal(&self) -> Signal<u16> {
        self.offset.clone()
    }

    /// Current scroll offset in rows.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset.get()
    }

    #[inline]
    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Largest valid offset. Zero when the document fits the viewport.
    #[inline]
    pub fn max_scroll(&self) -> u16 {
        self.document_height.saturating_sub(self.viewport_rows)
    }

    /// Update bounds after a resize or relayout, re-clamping the offset.
    pub fn set_bounds(&mut self, viewport_rows: u16, document_height: u16) {
        self.viewport_rows = viewport_rows;
        self.document_height = document_height;
        let clamped = self.offset.get().min(self.max_scroll());
        if clamped != self.offset.get() {
            self.offset.set(clamped);
        }
    }

    /// Scroll by a signed delta, clamped to `[0, max_scroll]`.
    ///
    /// Returns `true` if the offset moved, `false` at a boundary.
    pub fn scroll_by(&self, delta: i32) -> bool {
        let current = self.offset.get();
        let new = ((current as i32) + delta).clamp(0, self.max_scroll() as i32) as u16;
        if new == current {
            return false;
        }
        self.offset.set(new);
        true
    }

    /// Jump to an absolute offset, clamped.
    pub fn scroll_to(&self, row: u16) -> bool {
        let current = self.offset.get();
        let new = row.min(self.max_scroll());
        if new == current {
            return false;
        }
        self.offset.set(new);
        true
    }

    pub fn scroll_to_top(&self) -> bool {
        self.scroll_to(0)
    }

    pub fn scroll_to_bottom(&self) -> bool {
        self.scroll_to(self.max_scroll())
    }

    /// Rows a Page Up/Down moves.
    pub fn page_rows(&self) -> u16 {
        ((self.viewport_rows as f32 * PAGE_SCROLL_FACTOR) as u16).max(1)
    }

    /// Whether the page has scrolled past the threshold.
    ///
    /// Pure comparison, never sticky: scrolling back under the threshold
    /// flips it off again. An unscrollable document is never "scrolled".
    #[inline]
    pub fn scrolled(&self) -> bool {
        self.offset.get() > SCROLL_THRESHOLD
    }

    /// Raw scroll progress in `[0, 1]`: offset over max scroll.
    ///
    /// Degenerate documents (nothing to scroll) report 0 permanently.
    pub fn progress_raw(&self) -> f32 {
        let max = self.max_scroll();
        if max == 0 {
            return 0.0;
        }
        (self.offset.get() as f32 / max as f32).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> ScrollState {
        let mut state = ScrollState::new(40);
        state.set_bounds(40, 240); // max_scroll = 200
        state
    }

    #[test]
    fn test_scroll_by_clamps_and_reports() {
        let state = setup();

        assert!(state.scroll_by(10));
        assert_eq!(state.offset(), 10);

        assert!(!state.scroll_by(0));

        assert!(state.scroll_by(-100));
        assert_eq!(state.offset(), 0);

        assert!(!state.scroll_by(-1), "already at top");

        assert!(state.scroll_by(10_000));
        assert_eq!(state.offset(), state.max_scroll());
        assert!(!state.scroll_by(1), "already at bottom");
    }

    #[test]
    fn test_scrolled_threshold_not_sticky() {
        let state = setup();

        assert!(!state.scrolled());

        state.scroll_to(50);
        assert!(!state.scrolled(), "threshold is strictly greater-than");

        state.scroll_to(51);
        assert!(state.scrolled());

        state.scroll_to_top();
        assert!(!state.scrolled(), "flips back off below the threshold");
    }

    #[test]
    fn test_progress_endpoints() {
        let state = setup();

        assert_eq!(state.progress_raw(), 0.0);

        state.scroll_to_bottom();
        assert_eq!(state.progress_raw(), 1.0);

        state.scroll_to(100);
        let p = state.progress_raw();
        assert!(p > 0.49 && p < 0.51);
    }

    #[test]
    fn test_unscrollable_document_degrades() {
        let mut state = ScrollState::new(40);
        state.set_bounds(40, 30); // shorter than viewport

        assert_eq!(state.max_scroll(), 0);
        assert!(!state.scroll_by(10));
        assert!(!state.scrolled());
        assert_eq!(state.progress_raw(), 0.0);
    }

    #[test]
    fn test_set_bounds_reclamps_offset() {
        let mut state = setup();
        state.scroll_to(200);

        state.set_bounds(40, 100); // max_scroll = 60
        assert_eq!(state.offset(), 60);
    }

    #[test]
    fn test_page_rows() {
        let state = setup();
        assert_eq!(state.page_rows(), 36);

        let tiny = ScrollState::new(1);
        assert_eq!(tiny.page_rows(), 1);
    }
}
