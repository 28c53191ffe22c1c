//! Contact panel: the closing call to action with every contact channel.

use super::{RenderContext, Section, SectionId};
use crate::content::Profile;
use crate::layout::text_measure::wrap_text;
use crate::layout::SectionRect;
use crate::types::{Attr, BorderStyle};

const HEADLINE: &str = "Let's Connect.";

const BLURB: &str = "Whether you want to discuss AI research, a potential role, \
or just say hello — my inbox is always open.";

/// Blurb wraps at this width even inside a wide panel.
const BLURB_MAX_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy)]
pub struct ContactSection {
    profile: Profile,
}

impl ContactSection {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    fn inner_width(width: u16) -> u16 {
        width.saturating_sub(6)
    }

    fn blurb_lines(width: u16) -> Vec<String> {
        let inner = Self::inner_width(width);
        wrap_text(BLURB, inner.min(BLURB_MAX_WIDTH).max(1))
    }
}

impl Section for ContactSection {
    fn id(&self) -> SectionId {
        SectionId::Contact
    }

    fn measure(&self, width: u16) -> u16 {
        // pad, headline, gap, blurb, gap, mail row, gap, two social rows,
        // pad; plus the borders
        let blurb = Self::blurb_lines(width).len() as u16;
        9 + blurb + 2
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        let theme = *ctx.theme;
        let clip = ctx.clip;

        let panel_bg = ctx.color(theme.accent_strong);
        let border = ctx.color(theme.accent);

        ctx.buffer
            .fill_rect(rect.x, rect.y, rect.width, rect.height, panel_bg, clip.as_ref());
        ctx.buffer.draw_border(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            BorderStyle::Rounded,
            border,
            Some(panel_bg),
            clip.as_ref(),
        );

        let x = rect.x + 3;
        let mut y = rect.y + 2;

        let bright = ctx.color(theme.text_bright);
        ctx.buffer
            .draw_text(x, y, HEADLINE, bright, None, Attr::BOLD, clip.as_ref());
        y += 2;

        let blurb_fg = ctx.color(theme.text);
        for line in Self::blurb_lines(rect.width) {
            ctx.buffer
                .draw_text(x, y, &line, blurb_fg, None, Attr::NONE, clip.as_ref());
            y += 1;
        }
        y += 1;

        // Mail call to action carries the verbatim address
        let mail = format!("✉ Say Hello  {}", self.profile.mailto());
        ctx.buffer
            .draw_text(x, y, &mail, bright, None, Attr::BOLD, clip.as_ref());
        y += 2;

        let dim = ctx.color(theme.text);
        let linkedin = format!("LinkedIn  {}", self.profile.linkedin);
        ctx.buffer
            .draw_text(x, y, &linkedin, dim, None, Attr::NONE, clip.as_ref());
        y += 1;
        let github = format!("GitHub    {}", self.profile.github);
        ctx.buffer
            .draw_text(x, y, &github, dim, None, Attr::NONE, clip.as_ref());
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
        let section = ContactSection::new(content::data::PROFILE);
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
    fn test_headline_and_blurb() {
        let buffer = rendered(80);
        assert!(buffer.find_row("Let's Connect.").is_some());
        assert!(buffer.find_row("my inbox is always open").is_some());
    }

    #[test]
    fn test_mailto_verbatim_in_panel() {
        let buffer = rendered(80);
        assert!(buffer.find_row("mailto:adicadi158@gmail.com").is_some());
    }

    #[test]
    fn test_social_links_repeated() {
        let buffer = rendered(80);
        assert!(buffer.find_row("https://linkedin.com/in/adicadi").is_some());
        assert!(buffer.find_row("https://github.com/adicadi").is_some());
    }

    #[test]
    fn test_measure_tracks_blurb_wrapping() {
        let section = ContactSection::new(content::data::PROFILE);
        assert!(section.measure(30) > section.measure(80));
    }
}
