//! Hero section: greeting, the two-line name, tagline, calls to action,
//! social links.

use super::{RenderContext, Section, SectionId};
use crate::content::Profile;
use crate::layout::text_measure::wrap_text;
use crate::layout::SectionRect;
use crate::types::Attr;

const GREETING: &str = "── GUTEN TAG, I AM";

const TAGLINE: &str = "An AI Specialist currently pursuing M.Sc. in AI at BTU Cottbus. \
I build intelligent systems that bridge the gap between complex data and real-world solutions.";

const CTA_PRIMARY: &str = " View My Work ";
const CTA_SECONDARY: &str = " Get In Touch ";

/// Tagline wraps at this width even on wide terminals.
const TAGLINE_MAX_WIDTH: u16 = 64;

#[derive(Debug, Clone, Copy)]
pub struct HeroSection {
    profile: Profile,
}

impl HeroSection {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    fn tagline_lines(width: u16) -> Vec<String> {
        wrap_text(TAGLINE, width.min(TAGLINE_MAX_WIDTH).max(1))
    }
}

impl Section for HeroSection {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn measure(&self, width: u16) -> u16 {
        // greeting + gap + two name lines + gap, tagline, gap + buttons,
        // gap + three social rows
        let tagline = Self::tagline_lines(width).len() as u16;
        6 + tagline + 2 + 3
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        let x = rect.x;
        let mut y = rect.y;

        let theme = *ctx.theme;

        ctx.text(x, y, GREETING, theme.accent, Attr::BOLD);
        y += 2;

        let (first, second) = self.profile.name_lines();
        ctx.text(x, y, first, theme.text_bright, Attr::BOLD);
        ctx.text(x, y + 1, second, theme.accent, Attr::BOLD);
        y += 3;

        for line in Self::tagline_lines(rect.width) {
            ctx.text(x, y, &line, theme.text_muted, Attr::NONE);
            y += 1;
        }
        y += 1;

        // Call-to-action buttons: Projects, then Contact
        let primary_fg = ctx.color(theme.text_bright);
        let primary_bg = ctx.color(theme.accent_strong);
        let clip = ctx.clip;
        ctx.buffer.draw_text(
            x,
            y,
            CTA_PRIMARY,
            primary_fg,
            Some(primary_bg),
            Attr::BOLD,
            clip.as_ref(),
        );
        let secondary_x = x + CTA_PRIMARY.len() as u16 + 2;
        let secondary_fg = ctx.color(theme.text);
        let secondary_bg = ctx.color(theme.chip_bg);
        ctx.buffer.draw_text(
            secondary_x,
            y,
            CTA_SECONDARY,
            secondary_fg,
            Some(secondary_bg),
            Attr::NONE,
            clip.as_ref(),
        );
        y += 2;

        // Social links, mail last; the mail target is the verbatim address
        let socials = [
            ("GitHub  ", self.profile.github.to_string()),
            ("LinkedIn", self.profile.linkedin.to_string()),
            ("Mail    ", self.profile.mailto()),
        ];
        for (label, href) in socials {
            ctx.text(x, y, label, theme.text, Attr::BOLD);
            ctx.text(x + 10, y, &href, theme.text_dim, Attr::NONE);
            y += 1;
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::renderer::FrameBuffer;
    use crate::theme::presets;

    fn rendered(width: u16) -> FrameBuffer {
        let section = HeroSection::new(content::data::PROFILE);
        let height = section.measure(width);
        let mut buffer = FrameBuffer::new(width, height);
        let theme = presets::midnight();
        let mut ctx = RenderContext::new(&mut buffer, &theme);
        section.render(
            &mut ctx,
            SectionRect {
                x: 0,
                y: 0,
                width,
                height,
            },
        );
        buffer
    }

    #[test]
    fn test_name_splits_across_two_lines() {
        let buffer = rendered(80);
        let first = buffer.find_row("Aditya").unwrap();
        let second = buffer.find_row("Chaudhary").unwrap();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_mailto_is_verbatim() {
        let buffer = rendered(80);
        assert!(buffer.find_row("mailto:adicadi158@gmail.com").is_some());
    }

    #[test]
    fn test_social_entries_present() {
        let buffer = rendered(80);
        assert!(buffer.find_row("https://github.com/adicadi").is_some());
        assert!(buffer.find_row("https://linkedin.com/in/adicadi").is_some());
    }

    #[test]
    fn test_both_cta_buttons() {
        let buffer = rendered(80);
        let row = buffer.find_row("View My Work").unwrap();
        assert_eq!(buffer.find_row("Get In Touch"), Some(row));
    }

    #[test]
    fn test_measure_grows_when_narrow() {
        let section = HeroSection::new(content::data::PROFILE);
        assert!(section.measure(30) > section.measure(80));
    }
}
