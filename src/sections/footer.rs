//! Footer: copyright line with the current year and the closing taglines.

use chrono::{Datelike, Local};

use super::{RenderContext, Section, SectionId};
use crate::content::Profile;
use crate::layout::SectionRect;
use crate::types::Attr;

const TAGLINES: &str = "Artificial Intelligence • Machine Learning • Mobile Systems";

#[derive(Debug, Clone, Copy)]
pub struct FooterSection {
    profile: Profile,
    year: i32,
}

impl FooterSection {
    /// Footer for the current year.
    pub fn new(profile: Profile) -> Self {
        Self::with_year(profile, Local::now().year())
    }

    pub fn with_year(profile: Profile, year: i32) -> Self {
        Self { profile, year }
    }

    fn copyright(&self) -> String {
        format!(
            "© {} {}. Built with ❤ in Berlin.",
            self.year, self.profile.name
        )
    }
}

impl Section for FooterSection {
    fn id(&self) -> SectionId {
        SectionId::Footer
    }

    fn measure(&self, _width: u16) -> u16 {
        3 // rule, copyright, taglines
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        let theme = *ctx.theme;
        let clip = ctx.clip;

        let rule = ctx.color(theme.border);
        ctx.buffer
            .draw_hline(rect.x, rect.y, rect.width, '─', rule, None, clip.as_ref());

        let muted = ctx.color(theme.text_muted);
        ctx.buffer.draw_text_centered(
            rect.x,
            rect.y + 1,
            rect.width,
            &self.copyright(),
            muted,
            None,
            Attr::NONE,
            clip.as_ref(),
        );

        let dim = ctx.color(theme.text_dim);
        ctx.buffer.draw_text_centered(
            rect.x,
            rect.y + 2,
            rect.width,
            TAGLINES,
            dim,
            None,
            Attr::NONE,
            clip.as_ref(),
        );
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

    fn rendered(year: i32) -> FrameBuffer {
        let section = FooterSection::with_year(content::data::PROFILE, year);
        let mut buffer = FrameBuffer::new(80, 3);
        let theme = presets::midnight();
        let mut ctx = RenderContext::new(&mut buffer, &theme);
        section.render(
            &mut ctx,
            SectionRect {
                x: 0,
                y: 0,
                width: 80,
                height: 3,
            },
        );
        buffer
    }

    #[test]
    fn test_copyright_uses_given_year() {
        let buffer = rendered(2026);
        assert!(buffer
            .find_row("© 2026 Aditya Chaudhary. Built with ❤ in Berlin.")
            .is_some());
    }

    #[test]
    fn test_taglines_present() {
        let buffer = rendered(2026);
        assert!(buffer
            .find_row("Artificial Intelligence • Machine Learning • Mobile Systems")
            .is_some());
    }

    #[test]
    fn test_new_uses_current_year() {
        let footer = FooterSection::new(content::data::PROFILE);
        assert_eq!(footer.year, Local::now().year());
    }
}
