//! Text measurement.
//!
//! Display-width aware helpers for laying out text in terminal cells:
//! - ASCII printable: 1 cell
//! - CJK and most emoji: 2 cells (fullwidth)
//! - Control characters: 0 cells
//!
//! The width table is an approximation; a full implementation would use
//! the unicode-width crate.

/// Display width of a single character in terminal cells.
pub fn char_width(c: char) -> u8 {
    if c.is_ascii() {
        if c.is_ascii_control() { 0 } else { 1 }
    } else {
        let code = c as u32;
        if (0x1100..=0x115F).contains(&code)     // Hangul Jamo
            || (0x2E80..=0x9FFF).contains(&code)   // CJK
            || (0xAC00..=0xD7A3).contains(&code)   // Hangul Syllables
            || (0xF900..=0xFAFF).contains(&code)   // CJK Compatibility
            || (0xFE10..=0xFE1F).contains(&code)   // Vertical Forms
            || (0xFE30..=0xFE6F).contains(&code)   // CJK Compatibility Forms
            || (0xFF00..=0xFF60).contains(&code)   // Fullwidth Forms
            || (0xFFE0..=0xFFE6).contains(&code)   // Fullwidth Forms
            || (0x1F300..=0x1F9FF).contains(&code) // Emoji
            || (0x20000..=0x2FFFF).contains(&code) // CJK Extension B-F
        {
            2
        } else {
            1
        }
    }
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    s.chars().map(|c| char_width(c) as usize).sum()
}

/// Word-wrap text to a given width.
///
/// Breaks at word boundaries where possible; words longer than the width
/// are split mid-word. Explicit newlines are honored.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    if width == 0 {
        return vec![text.to_string()];
    }

    let width = width as usize;
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if raw_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut current_width = 0usize;

        for word in raw_line.split(' ') {
            let word_width = string_width(word);

            // Word fits on the current line (with a separating space)?
            let needed = if current.is_empty() {
                word_width
            } else {
                current_width + 1 + word_width
            };

            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(word);
                current_width += word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Word longer than the line: hard-split
                for c in word.chars() {
                    let cw = char_width(c) as usize;
                    if current_width + cw > width && !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += cw;
                }
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Truncate text to fit within a given width, adding an ellipsis if cut.
pub fn truncate_text(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if string_width(text) <= width as usize {
        return text.to_string();
    }

    // Leave room for the ellipsis
    let target_width = width.saturating_sub(1) as usize;
    let mut result = String::new();
    let mut current_width = 0usize;

    for c in text.chars() {
        let cw = char_width(c) as usize;
        if current_width + cw > target_width {
            break;
        }
        result.push(c);
        current_width += cw;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("a b c"), 5);
    }

    #[test]
    fn test_string_width_control_chars() {
        assert_eq!(string_width("\t"), 0);
        assert_eq!(string_width("a\tb"), 2);
    }

    #[test]
    fn test_string_width_wide() {
        assert_eq!(string_width("中"), 2);
        assert_eq!(string_width("❤"), 1); // BMP heavy heart is narrow
    }

    #[test]
    fn test_wrap_text_word_boundaries() {
        let lines = wrap_text("hello world", 5);
        assert_eq!(lines, vec!["hello", "world"]);

        let lines = wrap_text("the quick brown fox", 9);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_text_long_word_splits() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_newlines() {
        let lines = wrap_text("a\nb", 10);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("", 5), "");
    }

    #[test]
    fn test_truncate_text_exact() {
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hello", 4), "hel…");
    }
}
