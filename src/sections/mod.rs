//! Page sections.
//!
//! Each section is a pure function of its content slice: `measure` reports
//! the height it needs at a given width, `render` draws into the document
//! buffer at the rect layout assigned. Sections never own state; scroll,
//! reveal, and theme all come in through the render context.

pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use navbar::Navbar;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;

use crate::layout::text_measure::string_width;
use crate::layout::SectionRect;
use crate::renderer::FrameBuffer;
use crate::theme::{Theme, ThemeColor};
use crate::types::{Attr, ClipRect, Rgba};

// =============================================================================
// Identity
// =============================================================================

/// Document sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Projects,
    /// Experience and education share one section (side by side when wide).
    Experience,
    Skills,
    Contact,
    Footer,
}

/// Navbar anchors, in display order. Two anchors (Experience, Education)
/// land in the same combined section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    About,
    Projects,
    Experience,
    Education,
    Skills,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::About,
        Anchor::Projects,
        Anchor::Experience,
        Anchor::Education,
        Anchor::Skills,
        Anchor::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Anchor::About => "About",
            Anchor::Projects => "Projects",
            Anchor::Experience => "Experience",
            Anchor::Education => "Education",
            Anchor::Skills => "Skills",
            Anchor::Contact => "Contact",
        }
    }

    /// The section this anchor jumps into.
    pub fn target(&self) -> SectionId {
        match self {
            Anchor::About => SectionId::Hero,
            Anchor::Projects => SectionId::Projects,
            Anchor::Experience | Anchor::Education => SectionId::Experience,
            Anchor::Skills => SectionId::Skills,
            Anchor::Contact => SectionId::Contact,
        }
    }

    /// Anchor for a `1`-`6` jump key.
    pub fn from_digit(d: u8) -> Option<Anchor> {
        match d {
            1..=6 => Some(Self::ALL[(d - 1) as usize]),
            _ => None,
        }
    }
}

// =============================================================================
// Render context
// =============================================================================

/// Everything a section needs to draw itself.
pub struct RenderContext<'a> {
    pub buffer: &'a mut FrameBuffer,
    pub theme: &'a Theme,
    /// Reveal brightness in `[0, 1]`; 1 = fully revealed.
    pub dim: f32,
    pub clip: Option<ClipRect>,
}

impl<'a> RenderContext<'a> {
    pub fn new(buffer: &'a mut FrameBuffer, theme: &'a Theme) -> Self {
        Self {
            buffer,
            theme,
            dim: 1.0,
            clip: None,
        }
    }

    /// Resolve a theme color through the current reveal fade.
    pub fn color(&self, c: ThemeColor) -> Rgba {
        c.resolve().dimmed(self.dim)
    }

    pub fn text(&mut self, x: u16, y: u16, s: &str, fg: ThemeColor, attrs: Attr) {
        let fg = self.color(fg);
        let clip = self.clip;
        self.buffer.draw_text(x, y, s, fg, None, attrs, clip.as_ref());
    }
}

// =============================================================================
// Section trait
// =============================================================================

pub trait Section {
    fn id(&self) -> SectionId;

    /// Height needed at `width` columns.
    fn measure(&self, width: u16) -> u16;

    /// Draw into `rect`. Layout guarantees `rect.height == measure(rect.width)`.
    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect);
}

// =============================================================================
// Shared pieces
// =============================================================================

/// Rows a section heading occupies (eyebrow, title, gap).
pub const HEADING_ROWS: u16 = 3;

/// Draw the standard heading: uppercase eyebrow line, then the title.
pub fn draw_section_heading(
    ctx: &mut RenderContext<'_>,
    x: u16,
    y: u16,
    title: &str,
    subtitle: &str,
) {
    let eyebrow = subtitle.to_uppercase();
    let accent = ctx.theme.accent;
    let bright = ctx.theme.text_bright;
    ctx.text(x, y, &eyebrow, accent, Attr::BOLD);
    ctx.text(x, y + 1, title, bright, Attr::BOLD);
}

/// Rows a chip row flow occupies at `width`.
pub fn measure_chips(width: u16, items: &[&str]) -> u16 {
    if items.is_empty() || width == 0 {
        return 0;
    }

    let mut rows = 1u16;
    let mut used = 0usize;
    for item in items {
        let w = string_width(item) + 2; // 1 cell padding each side
        let needed = if used == 0 { w } else { used + 1 + w };
        if needed <= width as usize {
            used = needed;
        } else {
            rows += 1;
            used = w;
        }
    }
    rows
}

/// Draw chips flowing left to right, wrapping at `width`.
///
/// Returns the number of rows used. Chip count always equals `items.len()`;
/// chips wider than the row are drawn clipped rather than dropped.
pub fn draw_chips(
    ctx: &mut RenderContext<'_>,
    x: u16,
    y: u16,
    width: u16,
    items: &[&str],
    fg: ThemeColor,
    bg: ThemeColor,
) -> u16 {
    if items.is_empty() || width == 0 {
        return 0;
    }

    let fg = ctx.color(fg);
    let bg = ctx.color(bg);
    let clip = ctx.clip;

    let mut row = 0u16;
    let mut used = 0usize;
    for item in items {
        let w = string_width(item) + 2;
        let start = if used == 0 {
            0
        } else if used + 1 + w <= width as usize {
            used + 1
        } else {
            row += 1;
            0
        };

        let chip = format!(" {item} ");
        ctx.buffer.draw_text(
            x + start as u16,
            y + row,
            &chip,
            fg,
            Some(bg),
            Attr::NONE,
            clip.as_ref(),
        );
        used = start + w;
    }

    row + 1
}

// =============================================================================
// Tests
// =============================================================================
