//! Skills grid: one card per category, each with an icon and skill chips.

use super::{
    draw_chips, draw_section_heading, measure_chips, RenderContext, Section, SectionId,
    HEADING_ROWS,
};
use crate::content::SkillCategory;
use crate::layout::SectionRect;
use crate::types::{Attr, BorderStyle};

const CARD_GAP: u16 = 1;

/// Icon for a category. The set of known labels is closed; anything else
/// gets the default glyph.
pub fn icon_for(category: &str) -> char {
    match category {
        "Machine Learning" => '◉',
        "Programming" => '❯',
        "Cloud & DevOps" => '☁',
        "Data" => '▤',
        _ => '◇',
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SkillsSection {
    skills: &'static [SkillCategory],
}

impl SkillsSection {
    pub fn new(skills: &'static [SkillCategory]) -> Self {
        Self { skills }
    }

    fn inner_width(width: u16) -> u16 {
        width.saturating_sub(4)
    }

    fn card_height(cat: &SkillCategory, width: u16) -> u16 {
        let inner = Self::inner_width(width);
        // icon + label row, gap, chips; plus borders
        2 + measure_chips(inner, cat.skills) + 2
    }

    fn render_card(
        ctx: &mut RenderContext<'_>,
        cat: &SkillCategory,
        index: usize,
        rect: SectionRect,
    ) {
        let theme = *ctx.theme;
        let clip = ctx.clip;
        let surface = ctx.color(theme.surface);
        let border = ctx.color(theme.border);

        ctx.buffer
            .fill_rect(rect.x, rect.y, rect.width, rect.height, surface, clip.as_ref());
        ctx.buffer.draw_border(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            BorderStyle::Rounded,
            border,
            Some(surface),
            clip.as_ref(),
        );

        let inner = Self::inner_width(rect.width);
        let x = rect.x + 2;
        let y = rect.y + 1;

        let accent = theme.category_accent(index).dimmed(ctx.dim);
        ctx.buffer
            .draw_char(x, y, icon_for(cat.category), accent, None, Attr::NONE, clip.as_ref());
        let title_fg = ctx.color(theme.text_bright);
        ctx.buffer.draw_text(
            x + 2,
            y,
            cat.category,
            title_fg,
            None,
            Attr::BOLD,
            clip.as_ref(),
        );

        draw_chips(ctx, x, y + 2, inner, cat.skills, theme.chip_fg, theme.chip_bg);
    }
}

impl Section for SkillsSection {
    fn id(&self) -> SectionId {
        SectionId::Skills
    }

    fn measure(&self, width: u16) -> u16 {
        let cards: u16 = self
            .skills
            .iter()
            .map(|c| Self::card_height(c, width))
            .sum();
        let gaps = CARD_GAP * (self.skills.len().saturating_sub(1)) as u16;
        HEADING_ROWS + cards + gaps
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        draw_section_heading(ctx, rect.x, rect.y, "Technical Arsenal", "Skills & Tools");

        let mut y = rect.y + HEADING_ROWS;
        for (index, cat) in self.skills.iter().enumerate() {
            let height = Self::card_height(cat, rect.width);
            Self::render_card(
                ctx,
                cat,
                index,
                SectionRect {
                    x: rect.x,
                    y,
                    width: rect.width,
                    height,
                },
            );
            y += height + CARD_GAP;
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
        let section = SkillsSection::new(content::data::SKILLS);
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
    fn test_icon_mapping_is_closed_with_default() {
        assert_eq!(icon_for("Machine Learning"), '◉');
        assert_eq!(icon_for("Programming"), '❯');
        assert_eq!(icon_for("Cloud & DevOps"), '☁');
        assert_eq!(icon_for("Data"), '▤');
        assert_eq!(icon_for("Quantum Basket Weaving"), '◇');
        assert_eq!(icon_for(""), '◇');
    }

    #[test]
    fn test_every_category_rendered() {
        let buffer = rendered(80);
        for cat in content::data::SKILLS {
            assert!(buffer.find_row(cat.category).is_some(), "missing {}", cat.category);
        }
    }

    #[test]
    fn test_every_skill_chip_rendered() {
        let buffer = rendered(80);
        for cat in content::data::SKILLS {
            for skill in cat.skills {
                assert!(buffer.find_row(skill).is_some(), "missing chip {skill}");
            }
        }
    }

    #[test]
    fn test_heading_present() {
        let buffer = rendered(80);
        assert!(buffer.find_row("SKILLS & TOOLS").is_some());
        assert!(buffer.find_row("Technical Arsenal").is_some());
    }
}
