//! Scroll-reactive page shell.
//!
//! Owns the document (sections in fixed order), the scroll state, the
//! progress spring, and the per-section reveals. Each frame it renders the
//! visible sections into the document buffer, blits the viewport into the
//! screen buffer, and draws the fixed overlays (progress bar, navbar) on
//! top.
//!
//! A single render effect subscribes to the scroll signal and raises a
//! dirty flag; tearing the shell down stops the effect deterministically
//! on every exit path.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use spark_signals::effect;

use crate::content::Content;
use crate::layout::{self, DocumentLayout, SectionRect};
use crate::renderer::FrameBuffer;
use crate::sections::{
    Anchor, ContactSection, ExperienceSection, FooterSection, HeroSection, Navbar,
    ProjectsSection, Section, SectionId, SkillsSection,
};
use crate::state::{Reveal, ScrollState, Spring};
use crate::theme::{self, Theme};
use crate::types::ClipRect;

/// Rows above the document reserved for overlays when jumping to anchors.
const ANCHOR_MARGIN: u16 = 3;

pub struct Shell {
    sections: Vec<Box<dyn Section>>,
    /// Kept unboxed too: the Education anchor needs its stacked offset.
    experience: ExperienceSection,

    theme: Theme,
    scroll: ScrollState,
    spring: Spring,
    reveals: Vec<Reveal>,

    doc_layout: DocumentLayout,
    document: FrameBuffer,
    screen: FrameBuffer,
    width: u16,
    height: u16,

    dirty: Rc<Cell<bool>>,
    stop_effect: Option<Box<dyn FnOnce()>>,
}

impl Shell {
    pub fn new(content: Content, width: u16, height: u16) -> io::Result<Self> {
        let experience = ExperienceSection::new(content.experiences, content.education);
        let sections: Vec<Box<dyn Section>> = vec![
            Box::new(HeroSection::new(content.profile)),
            Box::new(ProjectsSection::new(content.projects)),
            Box::new(experience),
            Box::new(SkillsSection::new(content.skills)),
            Box::new(ContactSection::new(content.profile)),
            Box::new(FooterSection::new(content.profile)),
        ];

        let reveals = vec![Reveal::new(); sections.len()];
        let scroll = ScrollState::new(height);

        let dirty = Rc::new(Cell::new(true));
        let offset_signal = scroll.offset_signal();
        let flag = Rc::clone(&dirty);
        let stop = effect(move || {
            offset_signal.get();
            flag.set(true);
        });

        let mut shell = Self {
            sections,
            experience,
            theme: Theme::default(),
            scroll,
            spring: Spring::new(0.0),
            reveals,
            doc_layout: DocumentLayout {
                rects: Vec::new(),
                total_height: 0,
            },
            document: FrameBuffer::new(width, height),
            screen: FrameBuffer::new(width, height),
            width,
            height,
            dirty,
            stop_effect: Some(Box::new(stop)),
        };
        shell.relayout(width, height)?;
        Ok(shell)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-measure and re-position every section; call on startup and resize.
    pub fn relayout(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;

        let cw = layout::content_width(width);
        let heights: Vec<u16> = self.sections.iter().map(|s| s.measure(cw)).collect();
        self.doc_layout = layout::layout_document(width, &heights)?;

        let doc_height = self.doc_layout.total_height.max(height);
        self.document.resize(width, doc_height);
        self.screen.resize(width, height);

        self.scroll.set_bounds(height, self.doc_layout.total_height);
        // Spring target changes with the new bounds; snap so a resize does
        // not animate the bar
        self.spring.snap_to(self.scroll.progress_raw());
        self.dirty.set(true);
        Ok(())
    }

    pub fn document_height(&self) -> u16 {
        self.doc_layout.total_height
    }

    fn rect_of(&self, id: SectionId) -> Option<SectionRect> {
        self.sections
            .iter()
            .position(|s| s.id() == id)
            .and_then(|i| self.doc_layout.rects.get(i).copied())
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn scroll_by(&self, delta: i32) -> bool {
        self.scroll.scroll_by(delta)
    }

    pub fn scroll_to_top(&self) -> bool {
        self.scroll.scroll_to_top()
    }

    pub fn scroll_to_bottom(&self) -> bool {
        self.scroll.scroll_to_bottom()
    }

    pub fn page_rows(&self) -> u16 {
        self.scroll.page_rows()
    }

    pub fn scrolled(&self) -> bool {
        self.scroll.scrolled()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    pub fn progress(&self) -> f32 {
        self.spring.value()
    }

    /// Jump to an anchor's section. Unknown targets are a no-op.
    pub fn jump_to(&self, anchor: Anchor) -> bool {
        let Some(rect) = self.rect_of(anchor.target()) else {
            return false;
        };
        let mut row = rect.y;
        if anchor == Anchor::Education {
            row += self.experience.education_offset(layout::content_width(self.width));
        }
        self.scroll.scroll_to(row.saturating_sub(ANCHOR_MARGIN))
    }

    /// Cycle to the next theme preset.
    pub fn toggle_theme(&mut self) {
        self.theme = theme::next_preset(self.theme.name);
        self.dirty.set(true);
    }

    pub fn theme_name(&self) -> &'static str {
        self.theme.name
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advance animations and decide whether the frame needs compositing.
    ///
    /// Returns true when `compose` should run (state or animation moved).
    pub fn tick(&mut self, dt: f32) -> bool {
        let mut animating = false;

        // Spring chases the raw progress
        self.spring.set_target(self.scroll.progress_raw());
        if !self.spring.settled() {
            self.spring.step(dt);
            animating = true;
        }

        // Reveals: fire on first intersection, then ramp
        let top = self.scroll.offset();
        let bottom = top.saturating_add(self.height);
        for (i, reveal) in self.reveals.iter_mut().enumerate() {
            if let Some(rect) = self.doc_layout.rects.get(i) {
                let visible = rect.intersects_rows(top, bottom);
                if reveal.observe(visible) {
                    animating = true;
                }
            }
            if reveal.advance(dt) {
                animating = true;
            }
        }

        animating || self.dirty.replace(false)
    }

    /// Compose the screen buffer: document viewport plus fixed overlays.
    pub fn compose(&mut self) {
        let bg = self.theme.background.resolve();
        self.document.clear_with_bg(bg);

        let top = self.scroll.offset();
        let bottom = top.saturating_add(self.height);

        for (i, section) in self.sections.iter().enumerate() {
            let Some(rect) = self.doc_layout.rects.get(i).copied() else {
                continue;
            };
            // Slide can pull a section a few rows into view from below
            if !rect.intersects_rows(top, bottom.saturating_add(crate::state::reveal::SLIDE_ROWS))
            {
                continue;
            }

            let reveal = &self.reveals[i];
            let slide = reveal.slide_rows();
            let mut ctx = crate::sections::RenderContext::new(&mut self.document, &self.theme);
            ctx.dim = reveal.dim_factor();
            ctx.clip = Some(ClipRect::new(rect.x, rect.y, rect.width, rect.height));
            section.render(
                &mut ctx,
                SectionRect {
                    x: rect.x,
                    y: rect.y.saturating_add(slide),
                    width: rect.width,
                    height: rect.height,
                },
            );
        }

        self.screen.clear_with_bg(bg);
        self.screen
            .blit_rows(&self.document, top, 0, self.height);

        // Fixed overlays: progress bar on row 0, navbar beneath it
        let accent = self.theme.accent.resolve();
        let track = self.theme.border.resolve();
        self.screen.draw_progress(
            0,
            0,
            self.width,
            self.spring.value(),
            '━',
            '─',
            accent,
            track,
            None,
            None,
        );
        Navbar::render(&mut self.screen, &self.theme, 1, self.scroll.scrolled());
    }

    pub fn screen(&self) -> &FrameBuffer {
        &self.screen
    }

    /// Stop the render effect. Idempotent; also runs on drop.
    pub fn unmount(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.unmount();
    }
}

// =============================================================================
// Tests
// =============================================================================
