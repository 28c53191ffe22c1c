//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. The portfolio document is rendered into one
//! tall buffer; the visible viewport is blitted into the screen buffer.
//!
//! # Design Decisions
//!
//! - **Flat storage**: Uses `Vec<Cell>` with row-major indexing for cache efficiency.
//! - **Clipping**: All drawing functions accept an optional `ClipRect` for overflow:hidden.
//! - **Alpha blending**: Transparent backgrounds blend with existing cells.
//! - **Wide characters**: Emoji and CJK characters use continuation markers.

use crate::layout::text_measure::{char_width, string_width};
use crate::types::{Attr, BorderStyle, Cell, ClipRect, Rgba};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the full buffer bounds as a ClipRect.
    #[inline]
    pub fn bounds(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Get a mutable cell reference (returns None if out of bounds).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Clear with a specific background color.
    pub fn clear_with_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            cell.char = b' ' as u32;
            cell.fg = Rgba::TERMINAL_DEFAULT;
            cell.bg = bg;
            cell.attrs = Attr::NONE;
        }
    }

    /// Resize the buffer (clears content to default cells).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.clear();
        self.cells.resize(size, Cell::default());
    }

    /// Copy `rows` rows of `src` starting at `src_y` into this buffer at
    /// `dest_y`. Rows are copied whole; widths should match (narrower
    /// sources leave the right edge untouched).
    pub fn blit_rows(&mut self, src: &FrameBuffer, src_y: u16, dest_y: u16, rows: u16) {
        let copy_width = self.width.min(src.width);
        for row in 0..rows {
            let sy = src_y.saturating_add(row);
            let dy = dest_y.saturating_add(row);
            if sy >= src.height || dy >= self.height {
                break;
            }
            let src_start = src.index(0, sy);
            let dst_start = self.index(0, dy);
            let n = copy_width as usize;
            self.cells[dst_start..dst_start + n]
                .copy_from_slice(&src.cells[src_start..src_start + n]);
        }
    }

    // =========================================================================
    // Drawing Primitives
    // =========================================================================

    /// Set a single cell with optional clipping.
    ///
    /// Returns true if the cell was set.
    pub fn set_cell(
        &mut self,
        x: u16,
        y: u16,
        char: u32,
        fg: Rgba,
        bg: Rgba,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }

        if let Some(clip) = clip {
            if !clip.contains(x, y) {
                return false;
            }
        }

        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];

        // Alpha blend background if not opaque
        let blended_bg = if bg.is_opaque() || bg.is_terminal_default() || bg.is_ansi() {
            bg
        } else {
            Rgba::blend(bg, cell.bg)
        };

        cell.char = char;
        cell.fg = fg;
        cell.bg = blended_bg;
        cell.attrs = attrs;

        true
    }

    /// Fill a rectangle with a background color.
    pub fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        bg: Rgba,
        clip: Option<&ClipRect>,
    ) {
        let x1 = x;
        let y1 = y;
        let x2 = x.saturating_add(width).min(self.width);
        let y2 = y.saturating_add(height).min(self.height);

        let (x1, y1, x2, y2) = if let Some(clip) = clip {
            let cx2 = clip.x.saturating_add(clip.width);
            let cy2 = clip.y.saturating_add(clip.height);
            (x1.max(clip.x), y1.max(clip.y), x2.min(cx2), y2.min(cy2))
        } else {
            (x1, y1, x2, y2)
        };

        if x2 <= x1 || y2 <= y1 {
            return;
        }

        let is_opaque = bg.is_opaque() || bg.is_terminal_default() || bg.is_ansi();

        for row in y1..y2 {
            let row_start = self.index(x1, row);
            let row_end = self.index(x2, row);
            for cell in &mut self.cells[row_start..row_end] {
                if is_opaque {
                    cell.bg = bg;
                } else {
                    cell.bg = Rgba::blend(bg, cell.bg);
                }
                cell.char = b' ' as u32;
                cell.attrs = Attr::NONE;
            }
        }
    }

    /// Draw a single character.
    pub fn draw_char(
        &mut self,
        x: u16,
        y: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> bool {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        self.set_cell(x, y, char as u32, fg, bg, attrs, clip)
    }

    /// Draw text at a position.
    ///
    /// Returns the number of cells used (handles wide characters).
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);
        let mut col = x;

        for ch in text.chars() {
            if col >= self.width {
                break;
            }

            let char_width = char_width(ch);

            if char_width == 0 {
                continue; // Skip zero-width characters
            }

            if self.set_cell(col, y, ch as u32, fg, bg, attrs, clip) {
                // Handle wide characters (emoji, CJK)
                if char_width == 2 && col + 1 < self.width {
                    // Mark next cell as continuation (char = 0)
                    if clip.map_or(true, |c| c.contains(col + 1, y)) {
                        if let Some(next) = self.get_mut(col + 1, y) {
                            next.char = 0; // Continuation marker
                            next.fg = fg;
                            if !bg.is_transparent() {
                                next.bg = Rgba::blend(bg, next.bg);
                            }
                            next.attrs = attrs;
                        }
                    }
                }
            }

            col += char_width as u16;
        }

        col.saturating_sub(x)
    }

    /// Draw text centered within a width.
    pub fn draw_text_centered(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = ((width as usize - text_width) / 2) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw text right-aligned within a width.
    pub fn draw_text_right(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        text: &str,
        fg: Rgba,
        bg: Option<Rgba>,
        attrs: Attr,
        clip: Option<&ClipRect>,
    ) -> u16 {
        let text_width = string_width(text);
        if text_width >= width as usize {
            return self.draw_text(x, y, text, fg, bg, attrs, clip);
        }
        let offset = (width as usize - text_width) as u16;
        self.draw_text(x + offset, y, text, fg, bg, attrs, clip)
    }

    /// Draw a border around a rectangle.
    pub fn draw_border(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        style: BorderStyle,
        color: Rgba,
        bg: Option<Rgba>,
        clip: Option<&ClipRect>,
    ) {
        if width < 2 || height < 2 || style == BorderStyle::None {
            return;
        }

        let (horiz, vert, tl, tr, br, bl) = style.chars();
        let bg = bg.unwrap_or(Rgba::TRANSPARENT);

        let x2 = x + width - 1;
        let y2 = y + height - 1;

        let first = |s: &'static str| s.chars().next().unwrap_or(' ');

        // Corners
        self.draw_char(x, y, first(tl), color, Some(bg), Attr::NONE, clip);
        self.draw_char(x2, y, first(tr), color, Some(bg), Attr::NONE, clip);
        self.draw_char(x2, y2, first(br), color, Some(bg), Attr::NONE, clip);
        self.draw_char(x, y2, first(bl), color, Some(bg), Attr::NONE, clip);

        let horiz_char = first(horiz);
        let vert_char = first(vert);

        // Horizontal edges
        for col in (x + 1)..x2 {
            self.draw_char(col, y, horiz_char, color, Some(bg), Attr::NONE, clip);
            self.draw_char(col, y2, horiz_char, color, Some(bg), Attr::NONE, clip);
        }

        // Vertical edges
        for row in (y + 1)..y2 {
            self.draw_char(x, row, vert_char, color, Some(bg), Attr::NONE, clip);
            self.draw_char(x2, row, vert_char, color, Some(bg), Attr::NONE, clip);
        }
    }

    /// Draw a horizontal line.
    pub fn draw_hline(
        &mut self,
        x: u16,
        y: u16,
        length: u16,
        char: char,
        fg: Rgba,
        bg: Option<Rgba>,
        clip: Option<&ClipRect>,
    ) {
        for col in x..x.saturating_add(length).min(self.width) {
            self.draw_char(col, y, char, fg, bg, Attr::NONE, clip);
        }
    }

    /// Draw a progress bar.
    pub fn draw_progress(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        progress: f32,
        filled_char: char,
        empty_char: char,
        filled_fg: Rgba,
        empty_fg: Rgba,
        bg: Option<Rgba>,
        clip: Option<&ClipRect>,
    ) {
        let progress = progress.clamp(0.0, 1.0);
        let filled = (progress * width as f32).round() as u16;

        for col in 0..width {
            let actual_x = x + col;
            if col < filled {
                self.draw_char(actual_x, y, filled_char, filled_fg, bg, Attr::NONE, clip);
            } else {
                self.draw_char(actual_x, y, empty_char, empty_fg, bg, Attr::NONE, clip);
            }
        }
    }

    // =========================================================================
    // Inspection helpers (used heavily by section tests)
    // =========================================================================

    /// Collect a row's glyphs into a string, skipping continuation cells.
    pub fn row_string(&self, y: u16) -> String {
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if cell.char == 0 {
                    continue; // Wide-char continuation
                }
                if let Some(c) = char::from_u32(cell.char) {
                    out.push(c);
                }
            }
        }
        out
    }

    /// Find the first row (top to bottom) whose text contains `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.height).find(|&y| self.row_string(y).contains(needle))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framebuffer_creation() {
        let buffer = FrameBuffer::new(80, 24);
        assert_eq!(buffer.width(), 80);
        assert_eq!(buffer.height(), 24);
    }

    #[test]
    fn test_framebuffer_set_cell() {
        let mut buffer = FrameBuffer::new(10, 10);
        buffer.set_cell(5, 5, 'X' as u32, Rgba::RED, Rgba::BLACK, Attr::BOLD, None);

        let cell = buffer.get(5, 5).unwrap();
        assert_eq!(cell.char, 'X' as u32);
        assert_eq!(cell.fg, Rgba::RED);
        assert_eq!(cell.bg, Rgba::BLACK);
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_framebuffer_fill_rect() {
        let mut buffer = FrameBuffer::new(20, 20);
        buffer.fill_rect(5, 5, 10, 10, Rgba::BLUE, None);

        // Inside
        assert_eq!(buffer.get(5, 5).unwrap().bg, Rgba::BLUE);
        assert_eq!(buffer.get(14, 14).unwrap().bg, Rgba::BLUE);

        // Outside
        assert_eq!(buffer.get(4, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
        assert_eq!(buffer.get(15, 5).unwrap().bg, Rgba::TERMINAL_DEFAULT);
    }

    #[test]
    fn test_draw_text() {
        let mut buffer = FrameBuffer::new(20, 5);
        buffer.draw_text(0, 0, "Hello", Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(buffer.get(0, 0).unwrap().char, 'H' as u32);
        assert_eq!(buffer.get(1, 0).unwrap().char, 'e' as u32);
        assert_eq!(buffer.get(4, 0).unwrap().char, 'o' as u32);
    }

    #[test]
    fn test_draw_text_clipped() {
        let mut buffer = FrameBuffer::new(20, 5);
        let clip = ClipRect::new(0, 0, 3, 5);
        buffer.draw_text(0, 0, "Hello", Rgba::WHITE, None, Attr::NONE, Some(&clip));

        assert_eq!(buffer.get(2, 0).unwrap().char, 'l' as u32);
        assert_eq!(buffer.get(3, 0).unwrap().char, b' ' as u32);
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buffer = FrameBuffer::new(10, 2);
        buffer.draw_text(0, 0, "中x", Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(buffer.get(0, 0).unwrap().char, '中' as u32);
        assert_eq!(buffer.get(1, 0).unwrap().char, 0); // continuation
        assert_eq!(buffer.get(2, 0).unwrap().char, 'x' as u32);
    }

    #[test]
    fn test_blit_rows() {
        let mut doc = FrameBuffer::new(10, 30);
        doc.draw_text(0, 20, "row-twenty", Rgba::WHITE, None, Attr::NONE, None);

        let mut screen = FrameBuffer::new(10, 5);
        screen.blit_rows(&doc, 20, 0, 5);

        assert_eq!(screen.row_string(0), "row-twenty");
    }

    #[test]
    fn test_blit_rows_clamps_at_edges() {
        let doc = FrameBuffer::new(10, 8);
        let mut screen = FrameBuffer::new(10, 5);
        // Asking past the end of the document must not panic
        screen.blit_rows(&doc, 6, 0, 5);
    }

    #[test]
    fn test_draw_progress() {
        let mut buffer = FrameBuffer::new(10, 1);
        buffer.draw_progress(
            0,
            0,
            10,
            0.5,
            '━',
            ' ',
            Rgba::CYAN,
            Rgba::GRAY,
            None,
            None,
        );

        assert_eq!(buffer.get(4, 0).unwrap().char, '━' as u32);
        assert_eq!(buffer.get(5, 0).unwrap().char, ' ' as u32);
    }

    #[test]
    fn test_row_string_and_find_row() {
        let mut buffer = FrameBuffer::new(20, 3);
        buffer.draw_text(2, 1, "needle", Rgba::WHITE, None, Attr::NONE, None);

        assert_eq!(buffer.find_row("needle"), Some(1));
        assert_eq!(buffer.find_row("missing"), None);
        assert!(buffer.row_string(1).contains("needle"));
    }
}
