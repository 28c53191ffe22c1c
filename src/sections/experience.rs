//! Work timeline and education, one combined section.
//!
//! On wide terminals the two render side by side; otherwise education
//! stacks below the timeline. Both keep their own heading and anchor.

use super::{draw_section_heading, RenderContext, Section, SectionId, HEADING_ROWS};
use crate::content::{Education, Experience};
use crate::layout::text_measure::{truncate_text, wrap_text};
use crate::layout::SectionRect;
use crate::types::Attr;

/// Side-by-side above this width, stacked below it.
const TWO_COLUMN_MIN_WIDTH: u16 = 96;

/// Columns between the two columns.
const GUTTER: u16 = 4;

/// Columns the timeline rule and node markers occupy.
const TIMELINE_COLS: u16 = 3;

#[derive(Debug, Clone, Copy)]
pub struct ExperienceSection {
    experiences: &'static [Experience],
    education: &'static [Education],
}

impl ExperienceSection {
    pub fn new(experiences: &'static [Experience], education: &'static [Education]) -> Self {
        Self {
            experiences,
            education,
        }
    }

    fn two_column(width: u16) -> bool {
        width >= TWO_COLUMN_MIN_WIDTH
    }

    fn column_widths(width: u16) -> (u16, u16) {
        let left = (width - GUTTER) / 2;
        (left, width - GUTTER - left)
    }

    // --- experience timeline ---

    fn achievement_rows(exp: &Experience, content_width: u16) -> u16 {
        exp.achievements
            .iter()
            .map(|a| wrap_text(a, content_width.saturating_sub(2).max(1)).len() as u16)
            .sum()
    }

    fn item_height(exp: &Experience, width: u16) -> u16 {
        let cw = width.saturating_sub(TIMELINE_COLS);
        // role, company, period/location, achievements
        3 + Self::achievement_rows(exp, cw)
    }

    fn experience_block_height(&self, width: u16) -> u16 {
        let items: u16 = self
            .experiences
            .iter()
            .map(|e| Self::item_height(e, width))
            .sum();
        let gaps = (self.experiences.len().saturating_sub(1)) as u16;
        HEADING_ROWS + items + gaps
    }

    fn render_experience_block(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        draw_section_heading(ctx, rect.x, rect.y, "Working History", "Experience");
        let theme = *ctx.theme;

        let content_x = rect.x + TIMELINE_COLS;
        let cw = rect.width.saturating_sub(TIMELINE_COLS);
        let mut y = rect.y + HEADING_ROWS;

        for (idx, exp) in self.experiences.iter().enumerate() {
            let height = Self::item_height(exp, rect.width);

            // Timeline rule with a node at the item's first row
            ctx.text(rect.x, y, "●", theme.accent_strong, Attr::NONE);
            let last = idx == self.experiences.len() - 1;
            let rule_rows = if last { height } else { height + 1 };
            for row in 1..rule_rows {
                ctx.text(rect.x, y + row, "│", theme.border, Attr::NONE);
            }

            ctx.text(content_x, y, exp.role, theme.text_bright, Attr::BOLD);
            ctx.text(content_x, y + 1, exp.company, theme.text_muted, Attr::NONE);

            let badge = format!(" {} ", exp.period);
            let badge_fg = ctx.color(theme.badge_fg);
            let badge_bg = ctx.color(theme.badge_bg);
            let clip = ctx.clip;
            ctx.buffer.draw_text(
                content_x,
                y + 2,
                &badge,
                badge_fg,
                Some(badge_bg),
                Attr::NONE,
                clip.as_ref(),
            );
            let badge_cols = crate::layout::text_measure::string_width(&badge) as u16;
            let loc_x = content_x + badge_cols + 1;
            let location = truncate_text(exp.location, cw.saturating_sub(badge_cols + 1));
            ctx.text(loc_x, y + 2, &location, theme.text_dim, Attr::NONE);

            let mut row = y + 3;
            for achievement in exp.achievements {
                let lines = wrap_text(achievement, cw.saturating_sub(2).max(1));
                for (i, line) in lines.iter().enumerate() {
                    if i == 0 {
                        ctx.text(content_x, row, "›", theme.accent_strong, Attr::NONE);
                    }
                    ctx.text(content_x + 2, row, line, theme.text_muted, Attr::NONE);
                    row += 1;
                }
            }

            y += height + 1;
        }
    }

    // --- education ---

    fn entry_height(edu: &Education, width: u16) -> u16 {
        let w = width.max(1);
        let institution = wrap_text(edu.institution, w).len() as u16;
        let coursework = wrap_text(&format!("Coursework: {}", edu.coursework), w).len() as u16;
        // institution, degree, period/location, coursework
        institution + 2 + coursework
    }

    fn education_block_height(&self, width: u16) -> u16 {
        let entries: u16 = self
            .education
            .iter()
            .map(|e| Self::entry_height(e, width))
            .sum();
        let gaps = (self.education.len().saturating_sub(1)) as u16;
        HEADING_ROWS + entries + gaps
    }

    /// Rows from the section top to the education block (0 when the two
    /// columns sit side by side). Lets the Education anchor land on the
    /// block even when it is stacked below the timeline.
    pub fn education_offset(&self, width: u16) -> u16 {
        if Self::two_column(width) {
            0
        } else {
            self.experience_block_height(width) + 1
        }
    }

    fn render_education_block(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        draw_section_heading(ctx, rect.x, rect.y, "Academic Journey", "Education");
        let theme = *ctx.theme;

        let mut y = rect.y + HEADING_ROWS;
        for edu in self.education {
            for line in wrap_text(edu.institution, rect.width.max(1)) {
                ctx.text(rect.x, y, &line, theme.text_bright, Attr::BOLD);
                y += 1;
            }
            ctx.text(rect.x, y, edu.degree, theme.accent, Attr::NONE);
            y += 1;

            let meta = truncate_text(
                &format!("{} · {}", edu.period, edu.location),
                rect.width.max(1),
            );
            ctx.text(rect.x, y, &meta, theme.text_dim, Attr::NONE);
            y += 1;

            for line in wrap_text(&format!("Coursework: {}", edu.coursework), rect.width.max(1)) {
                ctx.text(rect.x, y, &line, theme.text_muted, Attr::NONE);
                y += 1;
            }
            y += 1;
        }
    }
}

impl Section for ExperienceSection {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn measure(&self, width: u16) -> u16 {
        if Self::two_column(width) {
            let (lw, rw) = Self::column_widths(width);
            self.experience_block_height(lw)
                .max(self.education_block_height(rw))
        } else {
            self.experience_block_height(width) + 1 + self.education_block_height(width)
        }
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        if Self::two_column(rect.width) {
            let (lw, rw) = Self::column_widths(rect.width);
            self.render_experience_block(
                ctx,
                SectionRect {
                    x: rect.x,
                    y: rect.y,
                    width: lw,
                    height: rect.height,
                },
            );
            self.render_education_block(
                ctx,
                SectionRect {
                    x: rect.x + lw + GUTTER,
                    y: rect.y,
                    width: rw,
                    height: rect.height,
                },
            );
        } else {
            let exp_height = self.experience_block_height(rect.width);
            self.render_experience_block(
                ctx,
                SectionRect {
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: exp_height,
                },
            );
            self.render_education_block(
                ctx,
                SectionRect {
                    x: rect.x,
                    y: rect.y + exp_height + 1,
                    width: rect.width,
                    height: rect.height.saturating_sub(exp_height + 1),
                },
            );
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

    fn section() -> ExperienceSection {
        ExperienceSection::new(content::data::EXPERIENCES, content::data::EDUCATION)
    }

    fn rendered(width: u16) -> FrameBuffer {
        let s = section();
        let height = s.measure(width);
        let mut buffer = FrameBuffer::new(width, height);
        let theme = presets::midnight();
        let mut ctx = RenderContext::new(&mut buffer, &theme);
        s.render(
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
    fn test_timeline_preserves_source_order() {
        let buffer = rendered(80);
        let first = buffer.find_row("Pixlia Tech").unwrap();
        let second = buffer.find_row("TradeMunch").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_item_fields_rendered() {
        let buffer = rendered(80);
        assert!(buffer.find_row("Machine Learning Intern").is_some());
        assert!(buffer.find_row("Mar 2024 – Sep 2024").is_some());
        assert!(buffer.find_row("Remote").is_some());
    }

    #[test]
    fn test_education_entries_rendered() {
        let buffer = rendered(80);
        assert!(buffer.find_row("Brandenburg University of Technology").is_some());
        assert!(buffer.find_row("M.Sc. in Artificial Intelligence").is_some());
        assert!(buffer.find_row("Amity University").is_some());
        assert!(buffer.find_row("Coursework: Deep Learning").is_some());
    }

    #[test]
    fn test_stacked_education_sits_below_experience() {
        let width = 80; // below the two-column threshold
        let buffer = rendered(width);
        let exp = buffer.find_row("Working History").unwrap();
        let edu = buffer.find_row("Academic Journey").unwrap();
        assert!(edu > exp);
        assert_eq!(edu, section().education_offset(width) + 1);
    }

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let buffer = rendered(120);
        let exp = buffer.find_row("Working History").unwrap();
        let edu = buffer.find_row("Academic Journey").unwrap();
        assert_eq!(exp, edu, "headings share the top row when side by side");
        assert_eq!(section().education_offset(120), 0);
    }

    #[test]
    fn test_measure_matches_block_heights_when_stacked() {
        let s = section();
        let width = 80;
        assert_eq!(
            s.measure(width),
            s.experience_block_height(width) + 1 + s.education_block_height(width)
        );
    }
}
