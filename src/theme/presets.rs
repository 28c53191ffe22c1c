//! Built-in theme presets.

use super::{Theme, ThemeColor};

/// Preset names, in cycle order.
pub const PRESET_NAMES: &[&str] = &["midnight", "terminal"];

/// The preset the app starts with.
pub const DEFAULT_PRESET: &str = "midnight";

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "midnight" => Some(midnight()),
        "terminal" => Some(terminal()),
        _ => None,
    }
}

/// The preset after `name` in cycle order (wraps; unknown names restart).
pub fn next_preset(name: &str) -> Theme {
    let idx = PRESET_NAMES.iter().position(|&n| n == name);
    let next = match idx {
        Some(i) => PRESET_NAMES[(i + 1) % PRESET_NAMES.len()],
        None => DEFAULT_PRESET,
    };
    // PRESET_NAMES entries always resolve
    get_preset(next).unwrap_or_else(midnight)
}

/// Slate/indigo dark palette. The default.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight",

        background: ThemeColor::hex(0x020617),
        surface: ThemeColor::hex(0x0f172a),
        border: ThemeColor::hex(0x1e293b),
        border_accent: ThemeColor::hex(0x4f46e5),

        text: ThemeColor::hex(0xe2e8f0),
        text_bright: ThemeColor::hex(0xffffff),
        text_muted: ThemeColor::hex(0x94a3b8),
        text_dim: ThemeColor::hex(0x64748b),

        accent: ThemeColor::hex(0x818cf8),
        accent_strong: ThemeColor::hex(0x4f46e5),

        chip_bg: ThemeColor::hex(0x1e293b),
        chip_fg: ThemeColor::hex(0xcbd5e1),
        badge_bg: ThemeColor::hex(0x1e1b4b),
        badge_fg: ThemeColor::hex(0x818cf8),

        category_accents: [
            ThemeColor::hex(0xc084fc), // purple
            ThemeColor::hex(0x60a5fa), // blue
            ThemeColor::hex(0xf472b6), // pink
            ThemeColor::hex(0x34d399), // emerald
        ],
    }
}

/// ANSI palette preset that respects the terminal's own scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",

        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        border: ThemeColor::Ansi(8),
        border_accent: ThemeColor::Ansi(12),

        text: ThemeColor::Default,
        text_bright: ThemeColor::Ansi(15),
        text_muted: ThemeColor::Ansi(7),
        text_dim: ThemeColor::Ansi(8),

        accent: ThemeColor::Ansi(12),
        accent_strong: ThemeColor::Ansi(4),

        chip_bg: ThemeColor::Ansi(0),
        chip_fg: ThemeColor::Ansi(7),
        badge_bg: ThemeColor::Ansi(0),
        badge_fg: ThemeColor::Ansi(12),

        category_accents: [
            ThemeColor::Ansi(13),
            ThemeColor::Ansi(12),
            ThemeColor::Ansi(9),
            ThemeColor::Ansi(10),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_preset() {
        assert!(get_preset("midnight").is_some());
        assert!(get_preset("terminal").is_some());
        assert!(get_preset("nope").is_none());
    }

    #[test]
    fn test_next_preset_cycles() {
        assert_eq!(next_preset("midnight").name, "terminal");
        assert_eq!(next_preset("terminal").name, "midnight");
        assert_eq!(next_preset("garbage").name, DEFAULT_PRESET);
    }

    #[test]
    fn test_every_preset_name_resolves() {
        for name in PRESET_NAMES {
            assert!(get_preset(name).is_some(), "missing preset {name}");
        }
    }
}
