//! Theme system.
//!
//! Semantic color slots resolved to renderer colors. Two presets ship:
//! `midnight` (the page's slate/indigo palette, the default) and `terminal`
//! (ANSI colors that respect the terminal's own scheme). The app cycles
//! presets at runtime.

use crate::types::Rgba;

pub mod presets;

pub use presets::{get_preset, next_preset, DEFAULT_PRESET, PRESET_NAMES};

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme color:
/// - `Default`: terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Default,
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to a renderer color.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }

    /// Shorthand for an opaque 0xRRGGBB color.
    pub const fn hex(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Semantic color slots for the portfolio page.
///
/// Plain `Copy` data; sections copy the theme out of the render context
/// before borrowing the buffer mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,

    // Page surfaces
    pub background: ThemeColor,
    pub surface: ThemeColor,
    pub border: ThemeColor,
    pub border_accent: ThemeColor,

    // Text
    pub text: ThemeColor,
    pub text_bright: ThemeColor,
    pub text_muted: ThemeColor,
    pub text_dim: ThemeColor,

    // Accents
    pub accent: ThemeColor,
    pub accent_strong: ThemeColor,

    // Tag chips and period badges
    pub chip_bg: ThemeColor,
    pub chip_fg: ThemeColor,
    pub badge_bg: ThemeColor,
    pub badge_fg: ThemeColor,

    // Per-category accents for the skills grid (cycled by index)
    pub category_accents: [ThemeColor; 4],
}

impl Theme {
    /// Accent for the skill category at `index` (wraps around).
    pub fn category_accent(&self, index: usize) -> Rgba {
        self.category_accents[index % self.category_accents.len()].resolve()
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::midnight()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_resolve() {
        assert_eq!(ThemeColor::Default.resolve(), Rgba::TERMINAL_DEFAULT);
        assert_eq!(ThemeColor::Ansi(4).resolve(), Rgba::ansi(4));
        assert_eq!(
            ThemeColor::hex(0x818cf8).resolve(),
            Rgba::rgb(0x81, 0x8c, 0xf8)
        );
    }

    #[test]
    fn test_category_accent_wraps() {
        let theme = Theme::default();
        assert_eq!(theme.category_accent(0), theme.category_accent(4));
        assert_eq!(theme.category_accent(1), theme.category_accent(5));
    }

    #[test]
    fn test_default_is_midnight() {
        assert_eq!(Theme::default().name, "midnight");
    }

    #[test]
    fn test_theme_copies_out_of_a_shared_reference() {
        let theme = Theme::default();
        let by_ref = &theme;
        let copied = *by_ref;
        assert_eq!(copied, theme);
    }
}
