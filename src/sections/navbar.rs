//! Fixed navigation bar overlay.
//!
//! Rendered over the page every frame, never part of the document. Shows
//! the brand mark and the six anchors with their jump keys. Transparent
//! while the page sits near the top; once scrolled past the threshold it
//! gains opaque chrome and a bottom border.

use super::Anchor;
use crate::renderer::FrameBuffer;
use crate::theme::Theme;
use crate::types::Attr;

const BRAND: &str = "AC.";

pub struct Navbar;

impl Navbar {
    /// Rows the overlay occupies.
    pub const HEIGHT: u16 = 2;

    pub fn render(buffer: &mut FrameBuffer, theme: &Theme, y: u16, scrolled: bool) {
        let width = buffer.width();

        if scrolled {
            let surface = theme.surface.resolve();
            buffer.fill_rect(0, y, width, Self::HEIGHT, surface, None);
            let border = theme.border.resolve();
            buffer.draw_hline(0, y + 1, width, '─', border, None, None);
        }

        let bg = scrolled.then(|| theme.surface.resolve());
        buffer.draw_text(2, y, BRAND, theme.accent.resolve(), bg, Attr::BOLD, None);

        // Anchors with their jump keys, right-aligned
        let mut items = String::new();
        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            if i > 0 {
                items.push_str("  ");
            }
            items.push_str(&format!("{} {}", i + 1, anchor.label()));
        }
        let fg = theme.text_muted.resolve();
        let right_edge = width.saturating_sub(2);
        buffer.draw_text_right(0, y, right_edge, &items, fg, bg, Attr::NONE, None);
    }
}

// =============================================================================
// Tests
// =============================================================================
