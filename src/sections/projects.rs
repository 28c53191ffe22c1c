//! Featured projects: one card per project, in dataset order.

use super::{
    draw_chips, draw_section_heading, measure_chips, RenderContext, Section, SectionId,
    HEADING_ROWS,
};
use crate::content::Project;
use crate::layout::text_measure::{truncate_text, wrap_text};
use crate::layout::SectionRect;
use crate::types::{Attr, BorderStyle};

/// Rows between cards.
const CARD_GAP: u16 = 1;

#[derive(Debug, Clone, Copy)]
pub struct ProjectsSection {
    projects: &'static [Project],
}

impl ProjectsSection {
    pub fn new(projects: &'static [Project]) -> Self {
        Self { projects }
    }

    /// Inner content width of a card at section width `width`.
    fn inner_width(width: u16) -> u16 {
        width.saturating_sub(4) // border + 1 column padding each side
    }

    fn bullet_rows(project: &Project, inner: u16) -> u16 {
        project
            .description
            .iter()
            .map(|b| wrap_text(b, inner.saturating_sub(2).max(1)).len() as u16)
            .sum()
    }

    fn card_height(project: &Project, width: u16) -> u16 {
        let inner = Self::inner_width(width);
        // banner, gap, title, subtitle, gap, bullets, gap, chips
        let content = 5 + Self::bullet_rows(project, inner) + 1 + measure_chips(inner, project.tech_stack);
        content + 2 // borders
    }

    fn render_card(ctx: &mut RenderContext<'_>, project: &Project, rect: SectionRect) {
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
        let mut y = rect.y + 1;

        // Image banner
        let banner = truncate_text(&format!("▣ {}", project.image_ref()), inner);
        ctx.text(x, y, &banner, theme.text_dim, Attr::NONE);
        y += 2;

        ctx.text(x, y, project.title, theme.text_bright, Attr::BOLD);
        if project.external_link.is_some() {
            let fg = ctx.color(theme.text_dim);
            ctx.buffer.draw_text_right(
                x,
                y,
                inner,
                "↗",
                fg,
                None,
                Attr::NONE,
                clip.as_ref(),
            );
        }
        y += 1;
        ctx.text(x, y, project.subtitle, theme.accent, Attr::NONE);
        y += 2;

        for bullet in project.description {
            let lines = wrap_text(bullet, inner.saturating_sub(2).max(1));
            for (i, line) in lines.iter().enumerate() {
                if i == 0 {
                    ctx.text(x, y, "•", theme.accent_strong, Attr::NONE);
                }
                ctx.text(x + 2, y, line, theme.text_muted, Attr::NONE);
                y += 1;
            }
        }
        y += 1;

        draw_chips(ctx, x, y, inner, project.tech_stack, theme.chip_fg, theme.chip_bg);
    }
}

impl Section for ProjectsSection {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn measure(&self, width: u16) -> u16 {
        let cards: u16 = self
            .projects
            .iter()
            .map(|p| Self::card_height(p, width))
            .sum();
        let gaps = CARD_GAP * (self.projects.len().saturating_sub(1)) as u16;
        HEADING_ROWS + cards + gaps
    }

    fn render(&self, ctx: &mut RenderContext<'_>, rect: SectionRect) {
        draw_section_heading(ctx, rect.x, rect.y, "Featured Projects", "Portfolio");

        let mut y = rect.y + HEADING_ROWS;
        for project in self.projects {
            let height = Self::card_height(project, rect.width);
            Self::render_card(
                ctx,
                project,
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
